use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Separator substitute used by Claude Code for project directory names
pub const ENCODED_SEPARATOR: char = '-';

/// Environment variable Claude Code reads for a relocated config directory
pub const CLAUDE_CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Decode a Claude Code project directory name back into a path.
///
/// `-Users-stevey-gt-gastown` becomes `/Users/stevey/gt/gastown`. The mapping is
/// lossy: a `-` that was part of a segment name also turns into `/`.
pub fn decode_project_dir(encoded: &str) -> String {
    let (root, rest) = match encoded.strip_prefix(ENCODED_SEPARATOR) {
        Some(rest) => ("/", rest),
        None => ("", encoded),
    };
    format!("{}{}", root, rest.replace(ENCODED_SEPARATOR, "/"))
}

/// Encode a project path into Claude Code's directory name format.
///
/// Claude Code replaces both '/' and '.' with '-'.
pub fn encode_project_dir(project_root: &Path) -> String {
    let path_str = project_root.to_string_lossy();
    let encoded = path_str
        .replace(['/', '.'], "-")
        .trim_start_matches(ENCODED_SEPARATOR)
        .to_string();
    format!("-{}", encoded)
}

/// Resolve the Claude Code data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CLAUDE_CONFIG_DIR environment variable (with tilde expansion)
/// 3. ~/.claude
pub fn resolve_claude_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CLAUDE_CONFIG_DIR_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".claude"));
    }

    Err(Error::Config(
        "Could not determine Claude directory: no HOME directory found".to_string(),
    ))
}

/// Directory holding one subdirectory per project
pub fn projects_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join("projects")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
