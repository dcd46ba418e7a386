//! Testing infrastructure for seance integration tests.
//!
//! - `TestWorld`: isolated Claude directory with a fluent setup API
//! - `fixtures`: JSONL record builders for session files

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
