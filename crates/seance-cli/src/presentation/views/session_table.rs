use crate::presentation::formatters::text::{pad_cell, truncate_cell};
use owo_colors::{OwoColorize, Style};
use seance_types::SessionDescriptor;
use std::fmt;

const ID_WIDTH: usize = 10;
const ROLE_WIDTH: usize = 24;
const STARTED_WIDTH: usize = 16;
const TOPIC_WIDTH: usize = 30;
const GUTTER: &str = "  ";

const TITLE: &str = "Claude Code Sessions";
const RESUME_HINT: &str = "Resume a session: claude --resume <full-session-id>";
const NO_GASTOWN_SESSIONS: &str = "No Gas Town sessions found.";
const ALL_HINT: &str = "Use --all to include non-Gas Town sessions";
const NO_SESSIONS: &str = "No sessions found.";

/// Plain-text listing of discovered sessions.
///
/// Sessions without a beacon are dimmed. Colors are only emitted when enabled,
/// so the same view renders to terminals and to pipes.
pub struct SessionTableView<'a> {
    sessions: &'a [SessionDescriptor],
    gastown_only: bool,
    colored: bool,
}

impl<'a> SessionTableView<'a> {
    pub fn new(sessions: &'a [SessionDescriptor], gastown_only: bool) -> Self {
        Self {
            sessions,
            gastown_only,
            colored: false,
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_empty(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gastown_only {
            writeln!(f, "{}", NO_GASTOWN_SESSIONS)?;
            writeln!(f, "{}", self.paint(ALL_HINT, Style::new().dimmed()))
        } else {
            writeln!(f, "{}", NO_SESSIONS)
        }
    }

    fn write_session(
        &self,
        f: &mut fmt::Formatter<'_>,
        session: &SessionDescriptor,
    ) -> fmt::Result {
        let cells = [
            pad_cell(session.short_id(), ID_WIDTH),
            pad_cell(&truncate_cell(&session.display_role(), ROLE_WIDTH), ROLE_WIDTH),
            pad_cell(&session.format_time(), STARTED_WIDTH),
            truncate_cell(session.display_topic(), TOPIC_WIDTH),
        ];

        let line = if session.is_gastown {
            cells.join(GUTTER)
        } else {
            cells
                .iter()
                .map(|cell| self.paint(cell, Style::new().dimmed()))
                .collect::<Vec<_>>()
                .join(GUTTER)
        };
        writeln!(f, "{}", line.trim_end())
    }
}

impl fmt::Display for SessionTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sessions.is_empty() {
            return self.write_empty(f);
        }

        writeln!(f, "{}", self.paint(TITLE, Style::new().bold()))?;
        writeln!(f)?;

        let header = [
            pad_cell("ID", ID_WIDTH),
            pad_cell("ROLE", ROLE_WIDTH),
            pad_cell("STARTED", STARTED_WIDTH),
            "TOPIC".to_string(),
        ];
        writeln!(f, "{}", header.join(GUTTER))?;
        let rule_width = ID_WIDTH + ROLE_WIDTH + STARTED_WIDTH + TOPIC_WIDTH + 3 * GUTTER.len();
        writeln!(f, "{}", "─".repeat(rule_width))?;

        for session in self.sessions {
            self.write_session(f, session)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.paint(RESUME_HINT, Style::new().dimmed()))
    }
}
