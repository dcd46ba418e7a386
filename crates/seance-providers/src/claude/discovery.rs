use crate::{Error, Result};
use seance_core::decode_project_dir;
use seance_types::{SessionDescriptor, SessionFilter};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::io::{SESSION_EXTENSION, scan_session_file};

/// Prefix of sub-agent transcripts, which are not top-level sessions
const SUBAGENT_PREFIX: &str = "agent-";

/// Session discovery over Claude Code's `projects/` directory.
///
/// Layout: `<projects>/<encoded project path>/<session id>.jsonl`.
pub struct ClaudeDiscovery {
    projects_root: PathBuf,
}

impl ClaudeDiscovery {
    pub fn new(projects_root: impl Into<PathBuf>) -> Self {
        Self {
            projects_root: projects_root.into(),
        }
    }

    pub fn projects_root(&self) -> &Path {
        &self.projects_root
    }

    /// Whether a file name looks like a top-level session log.
    pub fn probe(file_name: &str) -> bool {
        file_name.ends_with(SESSION_EXTENSION) && !file_name.starts_with(SUBAGENT_PREFIX)
    }

    /// Scan every matching session file, unsorted.
    ///
    /// Rig and path criteria prune whole project directories before any file
    /// is opened; beacon and role criteria are applied to scanned descriptors.
    /// A missing projects root yields no sessions.
    pub fn scan_sessions(&self, filter: &SessionFilter) -> Result<Vec<SessionDescriptor>> {
        let root = &self.projects_root;
        match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(Error::NotADirectory(root.clone())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no session storage at {}", root.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() != 1 || keep_project_dir(entry, filter));

        let mut sessions = Vec::new();
        let mut project_path = String::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            // Directories are yielded before their contents
            if entry.depth() == 1 {
                project_path = decode_project_dir(&entry.file_name().to_string_lossy());
                continue;
            }

            if !entry.file_type().is_file() || !Self::probe(&entry.file_name().to_string_lossy())
            {
                continue;
            }

            let session = match scan_session_file(entry.path(), &project_path) {
                Ok(session) => session,
                Err(err) => {
                    tracing::debug!("skipping {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            if filter.matches_session(&session) {
                sessions.push(session);
            }
        }

        Ok(sessions)
    }
}

fn keep_project_dir(entry: &DirEntry, filter: &SessionFilter) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let project_path = decode_project_dir(&entry.file_name().to_string_lossy());
    let keep = filter.matches_project(&project_path);
    if !keep {
        tracing::trace!("pruned project {}", project_path);
    }
    keep
}

/// Discover sessions under `projects_root`: scan, filter, sort newest first,
/// and apply the limit.
pub fn discover_sessions(
    projects_root: &Path,
    filter: &SessionFilter,
) -> Result<Vec<SessionDescriptor>> {
    let sessions = ClaudeDiscovery::new(projects_root).scan_sessions(filter)?;
    Ok(filter.finish(sessions))
}
