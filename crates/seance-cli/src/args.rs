use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seance")]
#[command(about = "Discover and browse predecessor sessions", long_about = None)]
#[command(version)]
#[command(after_help = "\
Examples:
  seance                     # List recent Gas Town sessions
  seance --all               # Include non-Gas Town sessions
  seance --role crew         # Filter by role type
  seance --rig gastown       # Filter by rig
  seance --recent 10         # Last 10 sessions
  seance --json              # JSON output

Resume a session in Claude Code:
  claude --resume <session-id>")]
pub struct Cli {
    /// Include non-Gas Town sessions
    #[arg(short, long)]
    pub all: bool,

    /// Filter by role (crew, polecat, witness, etc.)
    #[arg(long)]
    pub role: Option<String>,

    /// Filter by rig name
    #[arg(long)]
    pub rig: Option<String>,

    /// Filter by project path substring
    #[arg(long)]
    pub path: Option<String>,

    /// Number of recent sessions to show (0 or less = all) [default: 20]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub recent: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Claude Code config directory (defaults to $CLAUDE_CONFIG_DIR or ~/.claude)
    #[arg(long)]
    pub claude_dir: Option<String>,

    /// Config file (defaults to <config dir>/seance/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["seance"]);
        assert!(!cli.all);
        assert!(!cli.json);
        assert_eq!(cli.recent, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["seance", "-a", "-n", "5", "--role", "crew"]);
        assert!(cli.all);
        assert_eq!(cli.recent, Some(5));
        assert_eq!(cli.role.as_deref(), Some("crew"));
    }

    #[test]
    fn test_negative_recent_is_accepted() {
        let cli = Cli::try_parse_from(["seance", "--all", "--recent", "-1"]).unwrap();
        assert_eq!(cli.recent, Some(-1));
        let cli = Cli::try_parse_from(["seance", "-n", "-5"]).unwrap();
        assert_eq!(cli.recent, Some(-5));
    }
}
