use crate::Result;
use chrono::DateTime;
use seance_types::SessionDescriptor;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::ops::ControlFlow;
use std::path::Path;

use super::beacon::match_beacon;
use super::schema::{SessionRecord, SummaryRecord};

/// Session log file extension
pub const SESSION_EXTENSION: &str = ".jsonl";

/// Read buffer per open file
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Longest single line accepted; transcript lines with pasted content get large.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Lines that must be read before the early exit may trigger.
pub const EARLY_EXIT_MIN_LINES: usize = 20;

/// Scan one session file into a descriptor.
///
/// Only fails when the file cannot be opened. A read error or an overlong line
/// ends the scan and returns what was collected up to that point.
pub fn scan_session_file(path: &Path, project_path: &str) -> Result<SessionDescriptor> {
    let file = File::open(path)?;
    let mut lines = LineReader::new(BufReader::with_capacity(READ_BUFFER_BYTES, file));
    let mut scan = SessionScan::new(session_id_from_path(path), project_path, path);

    loop {
        match lines.next_line() {
            Ok(Some(line)) => {
                if scan.feed(line).is_break() {
                    tracing::trace!(
                        "stopped reading {} after {} lines",
                        path.display(),
                        scan.lines_read()
                    );
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(
                    "read error in {} after {} lines: {}",
                    path.display(),
                    scan.lines_read(),
                    err
                );
                break;
            }
        }
    }

    Ok(scan.finish())
}

/// Session id from the file name (`<id>.jsonl`).
fn session_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.strip_suffix(SESSION_EXTENSION)
        .unwrap_or(name.as_ref())
        .to_string()
}

/// Incremental descriptor builder fed one line at a time.
pub struct SessionScan {
    session: SessionDescriptor,
    line_no: usize,
}

impl SessionScan {
    pub fn new(id: impl Into<String>, project_path: &str, file_path: &Path) -> Self {
        Self {
            session: SessionDescriptor::new(id, project_path, file_path.display().to_string()),
            line_no: 0,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Process the next line. `Break` means nothing more is worth reading.
    pub fn feed(&mut self, line: &[u8]) -> ControlFlow<()> {
        self.line_no += 1;

        // Line 1 belongs to the summary probe, whatever it turns out to be
        if self.line_no == 1 {
            if let Some(summary) = SummaryRecord::decode_summary(line) {
                self.session.summary = summary;
            }
            return ControlFlow::Continue(());
        }

        let Some(record) = SessionRecord::decode(line) else {
            tracing::trace!("skipping undecodable line {}", self.line_no);
            return ControlFlow::Continue(());
        };

        if record.is_user() {
            self.absorb_user_record(&record);
        }

        if self.session.is_gastown
            && self.session.start_time.is_some()
            && self.line_no > EARLY_EXIT_MIN_LINES
        {
            return ControlFlow::Break(());
        }

        ControlFlow::Continue(())
    }

    fn absorb_user_record(&mut self, record: &SessionRecord) {
        let session = &mut self.session;

        if session.start_time.is_none()
            && let Some(ts) = record.timestamp.as_deref()
            && !ts.is_empty()
        {
            session.start_time = DateTime::parse_from_rfc3339(ts).ok();
        }

        if session.id.is_empty()
            && let Some(session_id) = record.session_id.as_deref()
            && !session_id.is_empty()
        {
            session.id = session_id.to_string();
        }

        if !session.is_gastown
            && let Some(beacon) = match_beacon(&record.message_content())
        {
            session.is_gastown = true;
            session.role = beacon.role;
            session.topic = beacon.topic.unwrap_or_default();
        }
    }

    pub fn finish(self) -> SessionDescriptor {
        self.session
    }
}

/// Line splitter reusing one buffer, with a hard cap on line length.
struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its terminator (`\n` or `\r\n`), `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let limit = MAX_LINE_BYTES as u64 + 1;
        let read = (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if self.buf.len() > MAX_LINE_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {} bytes", MAX_LINE_BYTES),
            ));
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        Ok(Some(self.buf.as_slice()))
    }
}
