use regex::Regex;
use std::sync::LazyLock;

/// Literal tag opening a Gas Town beacon
pub const BEACON_TAG: &str = "[GAS TOWN]";

/// Whitespace as RE2 spells `\s`: ASCII only, without `\v`.
const WS: &str = r"[\t\n\f\r ]";

/// `[GAS TOWN] role • topic • timestamp`, with topic and timestamp optional.
///
/// Anchored at the end only: the beacon is usually the tail of a longer
/// startup message. Non-ASCII spaces are ordinary characters, so they can be
/// part of the role but never separate it from the tag.
static BEACON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"\[GAS TOWN\]{ws}+([^\t\n\f\r •]+){ws}*",
            r"(?:•{ws}*([^•]+?){ws}*)?",
            r"(?:•{ws}*([^\t\n\f\r ]+))?{ws}*$"
        ),
        ws = WS
    );
    Regex::new(&pattern).unwrap()
});

/// Fields surfaced from a beacon. The trailing timestamp is matched but dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beacon {
    pub role: String,
    pub topic: Option<String>,
}

/// Find a beacon in message text.
pub fn match_beacon(text: &str) -> Option<Beacon> {
    if !text.contains(BEACON_TAG) {
        return None;
    }

    let caps = BEACON_REGEX.captures(text)?;
    let role = caps.get(1)?.as_str().to_string();
    let topic = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(Beacon { role, topic })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beacon(role: &str, topic: Option<&str>) -> Option<Beacon> {
        Some(Beacon {
            role: role.to_string(),
            topic: topic.map(str::to_string),
        })
    }

    #[test]
    fn test_full_beacon() {
        assert_eq!(
            match_beacon("[GAS TOWN] gastown/crew/gus • assigned:gt-abc12 • 2025-12-30T15:42"),
            beacon("gastown/crew/gus", Some("assigned:gt-abc12"))
        );
        assert_eq!(
            match_beacon("[GAS TOWN] gastown/polecats/furiosa • ready • 2025-12-30T22:49"),
            beacon("gastown/polecats/furiosa", Some("ready"))
        );
        assert_eq!(
            match_beacon("[GAS TOWN] deacon • patrol • 2025-12-30T08:00"),
            beacon("deacon", Some("patrol"))
        );
    }

    #[test]
    fn test_beacon_without_timestamp() {
        assert_eq!(
            match_beacon("[GAS TOWN] witness • handoff"),
            beacon("witness", Some("handoff"))
        );
    }

    #[test]
    fn test_beacon_role_only() {
        assert_eq!(match_beacon("[GAS TOWN] mayor"), beacon("mayor", None));
        assert_eq!(match_beacon("[GAS TOWN] mayor  \n"), beacon("mayor", None));
    }

    #[test]
    fn test_topic_with_spaces_is_trimmed() {
        assert_eq!(
            match_beacon("[GAS TOWN] refinery •   merge queue backlog   • 2025-12-30T08:00"),
            beacon("refinery", Some("merge queue backlog"))
        );
    }

    #[test]
    fn test_beacon_as_message_suffix() {
        let text = "You are starting a new session.\n\nContext follows.\n\
                    [GAS TOWN] gastown/crew/joe • assigned:gt-xyz • 2025-12-30T15:42";
        assert_eq!(
            match_beacon(text),
            beacon("gastown/crew/joe", Some("assigned:gt-xyz"))
        );
    }

    #[test]
    fn test_trailing_text_prevents_match() {
        assert_eq!(match_beacon("[GAS TOWN] witness and then some prose"), None);
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        assert_eq!(match_beacon("[GAS TOWN]\u{00A0}witness"), None);
        assert_eq!(
            match_beacon("[GAS TOWN] witness\u{3000}"),
            beacon("witness\u{3000}", None)
        );
        assert_eq!(
            match_beacon("[GAS TOWN]\twitness \u{2022} patrol\r\n"),
            beacon("witness", Some("patrol"))
        );
    }

    #[test]
    fn test_no_beacon() {
        assert_eq!(match_beacon("Regular message without beacon"), None);
        assert_eq!(match_beacon(""), None);
        assert_eq!(match_beacon("[GAS TOWN]"), None);
        assert_eq!(match_beacon("[GAS TOWN]witness"), None);
    }
}
