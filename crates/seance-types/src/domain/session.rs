use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::role::infer_role_from_path;

/// Number of characters kept by [`SessionDescriptor::short_id`].
pub const SHORT_ID_LEN: usize = 8;

/// Summary of one Claude Code session log file.
///
/// Built once by the scanner and never mutated afterwards; later stages only
/// drop (filtering) or reorder (sorting) descriptors. The serialized field names
/// are the stable JSON export format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Session UUID (file stem, or the first `sessionId` seen when the stem is empty)
    pub id: String,

    /// Decoded project path the session belongs to
    pub path: String,

    /// Gas Town role from the beacon (e.g. "gastown/crew/joe")
    pub role: String,

    /// Topic from the beacon
    pub topic: String,

    /// Timestamp of the first user turn
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Summary record from the top of the file
    pub summary: String,

    /// Whether a `[GAS TOWN]` beacon was found
    pub is_gastown: bool,

    /// Full path to the JSONL file
    pub file_path: String,
}

impl SessionDescriptor {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Shortened session id for display.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Start time as `YYYY-MM-DD HH:MM` in the timestamp's own offset, or "unknown".
    pub fn format_time(&self) -> String {
        match &self.start_time {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "unknown".to_string(),
        }
    }

    /// Beacon role, falling back to a role inferred from the project path.
    pub fn display_role(&self) -> String {
        if self.role.is_empty() {
            infer_role_from_path(&self.path)
        } else {
            self.role.clone()
        }
    }

    /// Beacon topic, falling back to the session summary.
    pub fn display_topic(&self) -> &str {
        if self.topic.is_empty() {
            &self.summary
        } else {
            &self.topic
        }
    }
}
