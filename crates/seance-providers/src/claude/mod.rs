pub mod beacon;
pub mod discovery;
pub mod io;
pub mod schema;

pub use self::beacon::{BEACON_TAG, Beacon, match_beacon};
pub use self::discovery::{ClaudeDiscovery, discover_sessions};
pub use self::io::{EARLY_EXIT_MIN_LINES, MAX_LINE_BYTES, SessionScan, scan_session_file};
pub use self::schema::{MessagePayload, SessionRecord, StructuredMessage, SummaryRecord};
