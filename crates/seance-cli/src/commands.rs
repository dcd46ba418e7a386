use crate::args::Cli;
use crate::config::Config;
use crate::logging;
use crate::presentation::SessionTableView;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use seance_core::{projects_dir, resolve_claude_dir};
use seance_providers::discover_sessions;
use seance_types::{SessionDescriptor, SessionFilter};

/// Sessions shown when neither `--recent` nor the config sets a limit
pub const DEFAULT_RECENT: usize = 20;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;

    // Flag, then config file, then $CLAUDE_CONFIG_DIR, then ~/.claude
    let claude_dir_override = cli.claude_dir.as_deref().or(config.claude_dir.as_deref());
    let claude_dir = resolve_claude_dir(claude_dir_override)?;
    let projects_root = projects_dir(&claude_dir);

    let filter = build_filter(&cli, &config);
    tracing::debug!("scanning {} with {:?}", projects_root.display(), filter);

    let sessions = discover_sessions(&projects_root, &filter)
        .with_context(|| format!("Failed to discover sessions in {}", projects_root.display()))?;

    if cli.json {
        print_json(&sessions)
    } else {
        let colored = std::io::stdout().is_terminal();
        print!(
            "{}",
            SessionTableView::new(&sessions, filter.gastown_only).colored(colored)
        );
        Ok(())
    }
}

fn build_filter(cli: &Cli, config: &Config) -> SessionFilter {
    let limit = match cli.recent.or(config.recent) {
        // Zero or negative means unlimited
        Some(recent) => usize::try_from(recent).unwrap_or(0),
        None => DEFAULT_RECENT,
    };
    let mut filter = SessionFilter::new().gastown_only(!cli.all).limit(limit);

    if let Some(role) = &cli.role {
        filter = filter.role(role.as_str());
    }
    if let Some(rig) = &cli.rig {
        filter = filter.rig(rig.as_str());
    }
    if let Some(path) = &cli.path {
        filter = filter.path(path.as_str());
    }

    filter
}

fn print_json(sessions: &[SessionDescriptor]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(sessions)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_filter_defaults() {
        let cli = Cli::parse_from(["seance"]);
        let filter = build_filter(&cli, &Config::default());
        assert!(filter.gastown_only);
        assert_eq!(filter.limit, DEFAULT_RECENT);
        assert_eq!(filter.role, None);
    }

    #[test]
    fn test_filter_from_flags() {
        let cli = Cli::parse_from([
            "seance", "--all", "--role", "crew", "--rig", "gastown", "--path", "/gt/", "-n", "3",
        ]);
        let filter = build_filter(&cli, &Config::default());
        assert!(!filter.gastown_only);
        assert_eq!(filter.role.as_deref(), Some("crew"));
        assert_eq!(filter.rig.as_deref(), Some("gastown"));
        assert_eq!(filter.path.as_deref(), Some("/gt/"));
        assert_eq!(filter.limit, 3);
    }

    #[test]
    fn test_recent_flag_overrides_config() {
        let config = Config {
            claude_dir: None,
            recent: Some(7),
        };

        let cli = Cli::parse_from(["seance"]);
        assert_eq!(build_filter(&cli, &config).limit, 7);

        let cli = Cli::parse_from(["seance", "--recent", "0"]);
        assert_eq!(build_filter(&cli, &config).limit, 0);
    }

    #[test]
    fn test_negative_recent_is_unlimited() {
        let cli = Cli::parse_from(["seance", "-n", "-1"]);
        assert_eq!(build_filter(&cli, &Config::default()).limit, 0);

        let config = Config {
            claude_dir: None,
            recent: Some(-3),
        };
        let cli = Cli::parse_from(["seance"]);
        assert_eq!(build_filter(&cli, &config).limit, 0);
    }

    #[test]
    fn test_empty_role_means_no_filter() {
        let cli = Cli::parse_from(["seance", "--role", ""]);
        assert_eq!(build_filter(&cli, &Config::default()).role, None);
    }
}
