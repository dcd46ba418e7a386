//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated Claude directory
//! - Writing session files into encoded project directories
//! - Configuring CLI commands against that directory

use anyhow::Result;
use assert_cmd::Command;
use seance_core::{CLAUDE_CONFIG_DIR_ENV, encode_project_dir, projects_dir};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use seance_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_session(
///     "/Users/me/gt/gastown/witness",
///     "abc.jsonl",
///     &[fixtures::summary_line("Patrol")],
/// );
/// assert!(world.projects_dir().exists());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    claude_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty `projects/` dir.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let claude_dir = temp_dir.path().join(".claude");
        let config_path = temp_dir.path().join("seance.toml");

        std::fs::create_dir_all(projects_dir(&claude_dir)).expect("Failed to create projects dir");

        Self {
            temp_dir,
            claude_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Create a test environment without any Claude directory on disk.
    pub fn without_storage() -> Self {
        let world = Self::new();
        std::fs::remove_dir_all(&world.claude_dir).expect("Failed to remove Claude dir");
        world
    }

    /// Get the Claude directory path (.claude).
    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    /// Get the session storage root (.claude/projects).
    pub fn projects_dir(&self) -> PathBuf {
        projects_dir(&self.claude_dir)
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file passed to the CLI (may not exist).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write the CLI config file.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Add a session file under the encoded directory of `project_path`.
    pub fn with_session(self, project_path: &str, file_name: &str, lines: &[String]) -> Self {
        self.write_session(project_path, file_name, lines)
            .expect("Failed to write session");
        self
    }

    /// Write a session file and return its path.
    pub fn write_session(
        &self,
        project_path: &str,
        file_name: &str,
        lines: &[String],
    ) -> Result<PathBuf> {
        let dir_name = encode_project_dir(Path::new(project_path));
        let mut contents = lines.join("\n");
        contents.push('\n');
        self.write_raw(&dir_name, file_name, contents.as_bytes())
    }

    /// Write arbitrary bytes to `<projects>/<dir_name>/<file_name>`.
    pub fn write_raw(&self, dir_name: &str, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
        let dir = self.projects_dir().join(dir_name);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("seance")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--claude-dir")
            .arg(&self.claude_dir)
            .arg("--config")
            .arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove(CLAUDE_CONFIG_DIR_ENV);
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
