use serde::Deserialize;
use serde_json::Value;

/// Record discriminant carrying the session summary (top of file only)
pub const SUMMARY_TYPE: &str = "summary";

/// Record discriminant for user turns
pub const USER_TYPE: &str = "user";

/// The few fields discovery needs from one JSONL line.
///
/// Everything else in a Claude record (tool calls, usage, cwd, ...) is ignored.
/// Fields are optional so that records of any type decode as long as the line
/// is a JSON object with compatible field types.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl SessionRecord {
    /// Decode one line; `None` for anything that is not a usable record.
    ///
    /// Invalid UTF-8 bytes become U+FFFD instead of rejecting the line.
    pub fn decode(line: &[u8]) -> Option<Self> {
        serde_json::from_str(&String::from_utf8_lossy(line)).ok()
    }

    pub fn is_user(&self) -> bool {
        self.kind.as_deref() == Some(USER_TYPE)
    }

    /// Text content of the message payload, or "" when it has no usable shape.
    pub fn message_content(&self) -> String {
        self.message
            .as_ref()
            .and_then(MessagePayload::decode)
            .map(MessagePayload::into_content)
            .unwrap_or_default()
    }
}

/// Shape of the first line when Claude Code wrote a summary there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl SummaryRecord {
    /// Summary text if the line is a `summary` record.
    pub fn decode_summary(line: &[u8]) -> Option<String> {
        let record: Self = serde_json::from_str(&String::from_utf8_lossy(line)).ok()?;
        if record.kind.as_deref() == Some(SUMMARY_TYPE) {
            Some(record.summary.unwrap_or_default())
        } else {
            None
        }
    }
}

/// Message payload of a record.
///
/// Variants are attempted in declaration order: a plain string first, then an
/// object with a string `content`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessagePayload {
    Text(String),
    Structured(StructuredMessage),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StructuredMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl MessagePayload {
    pub fn decode(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn into_content(self) -> String {
        match self {
            MessagePayload::Text(text) => text,
            MessagePayload::Structured(message) => message.content.unwrap_or_default(),
        }
    }
}
