use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings read from `config.toml`. Command-line flags override every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Claude Code config directory (tilde is expanded)
    pub claude_dir: Option<String>,

    /// Default for `--recent`; zero or negative lists everything
    pub recent: Option<i64>,
}

impl Config {
    /// Load the config at `path`, or the defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// `<platform config dir>/seance/config.toml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seance").join("config.toml"))
    }

    /// Load from an explicit path, else from [`Config::default_path`].
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "claude_dir = \"~/alt-claude\"\nrecent = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.claude_dir.as_deref(), Some("~/alt-claude"));
        assert_eq!(config.recent, Some(5));
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "recent = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.claude_dir, None);
        assert_eq!(config.recent, Some(0));
    }

    #[test]
    fn test_negative_recent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "recent = -1\n").unwrap();

        assert_eq!(Config::load_from(&path).unwrap().recent, Some(-1));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "recent = \"lots\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            claude_dir: Some("/tmp/claude".to_string()),
            recent: Some(3),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
