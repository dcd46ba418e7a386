//! Builders for Claude Code JSONL records.
//!
//! Only the fields discovery reads are filled in, plus a few realistic extras
//! (`uuid`, `cwd`) so the records look like what Claude Code writes.

use serde_json::json;

/// `[GAS TOWN] role • topic • timestamp` beacon text.
pub fn beacon(role: &str, topic: &str, timestamp: &str) -> String {
    format!("[GAS TOWN] {} • {} • {}", role, topic, timestamp)
}

/// Summary record, as Claude Code writes on the first line.
pub fn summary_line(summary: &str) -> String {
    json!({
        "type": "summary",
        "summary": summary,
        "leafUuid": "00000000-0000-0000-0000-000000000000",
    })
    .to_string()
}

/// User record whose message is an object with string content.
pub fn user_line(session_id: &str, timestamp: &str, content: &str) -> String {
    json!({
        "type": "user",
        "uuid": format!("{}-{}", session_id, timestamp),
        "sessionId": session_id,
        "timestamp": timestamp,
        "cwd": "/tmp",
        "message": {"role": "user", "content": content},
    })
    .to_string()
}

/// User record whose message is a bare string.
pub fn user_line_plain(session_id: &str, timestamp: &str, message: &str) -> String {
    json!({
        "type": "user",
        "sessionId": session_id,
        "timestamp": timestamp,
        "message": message,
    })
    .to_string()
}

/// User record carrying tool results (content blocks), which hold no text.
pub fn tool_result_line(session_id: &str, timestamp: &str) -> String {
    json!({
        "type": "user",
        "sessionId": session_id,
        "timestamp": timestamp,
        "message": {
            "role": "user",
            "content": [{"type": "tool_result", "tool_use_id": "toolu_01", "content": "ok"}],
        },
    })
    .to_string()
}

/// Assistant record.
pub fn assistant_line(session_id: &str, timestamp: &str, text: &str) -> String {
    json!({
        "type": "assistant",
        "sessionId": session_id,
        "timestamp": timestamp,
        "message": {
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
        },
    })
    .to_string()
}

/// `count` assistant records, for padding a session past the early-exit window.
pub fn assistant_lines(session_id: &str, timestamp: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| assistant_line(session_id, timestamp, &format!("step {}", i)))
        .collect()
}
