// Error types
pub mod error;

// Provider implementations
pub mod claude;

// Claude Code discovery
pub use claude::{
    Beacon, ClaudeDiscovery, EARLY_EXIT_MIN_LINES, MessagePayload, SessionRecord,
    discover_sessions, match_beacon, scan_session_file,
};

// Error types
pub use error::{Error, Result};
