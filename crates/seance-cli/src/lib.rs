// NOTE: seance Architecture Rationale
//
// Why scan on every run (no index)?
// - Claude Code appends to session files while agents run
// - Beacons sit in the first few user turns, so most files stop after ~20 lines
// - Files without a beacon are read to the end to find their first user turn
//
// Why prune by project directory first?
// - Rig and path filters only need the decoded directory name
// - Whole projects are skipped without opening a single file

mod args;
mod commands;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{DEFAULT_RECENT, run};
