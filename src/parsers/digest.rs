//! Line-oriented state machine that turns a digest into notices.

use super::extractors::{apply_extractors, is_header, parse_header};
use crate::model::Bulletin;
use std::io::BufRead;

/// Section of the notice body the parser is currently inside
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    /// Outside any buffered section; lines are scanned but not kept
    #[default]
    None,
    Summary,
    Details,
    Update,
}

impl Section {
    /// Section change triggered by a marker line, if `line` is one
    fn from_marker(line: &str) -> Option<Self> {
        if line.starts_with("Summary:") {
            Some(Self::Summary)
        } else if line.starts_with("Details:") {
            Some(Self::Details)
        } else if line.starts_with("Update instructions:") {
            Some(Self::Update)
        } else if line.starts_with("Software Description:")
            || line.starts_with("References:")
            || line.starts_with("Package Information:")
        {
            Some(Self::None)
        } else {
            None
        }
    }
}

/// Accumulates trimmed lines joined by single spaces
#[derive(Debug, Default)]
struct TextBuffer(String);

impl TextBuffer {
    fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(line);
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn into_text(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}

/// The notice currently being assembled
#[derive(Debug)]
struct OpenNotice {
    bulletin: Bulletin,
    section: Section,
    summary: TextBuffer,
    details: TextBuffer,
    update: TextBuffer,
}

impl OpenNotice {
    fn from_header(line: &str) -> Self {
        let bulletin = match parse_header(line) {
            Some((id, title)) => Bulletin::new(Some(id), Some(title)),
            None => {
                tracing::debug!("Unrecognized notice header: {:?}", line);
                Bulletin::new(None, None)
            }
        };

        Self {
            bulletin,
            section: Section::None,
            summary: TextBuffer::default(),
            details: TextBuffer::default(),
            update: TextBuffer::default(),
        }
    }

    fn handle_line(&mut self, line: &str) {
        if let Some(section) = Section::from_marker(line) {
            if section == Section::Summary {
                self.summary.clear();
            }
            self.section = section;
            return;
        }

        apply_extractors(&mut self.bulletin, line);

        match self.section {
            Section::None => {}
            Section::Summary => self.summary.push_line(line),
            Section::Details => self.details.push_line(line),
            Section::Update => self.update.push_line(line),
        }
    }

    fn finalize(self) -> Bulletin {
        let mut bulletin = self.bulletin;
        bulletin.summary = self.summary.into_text();
        bulletin.description = self.details.into_text();
        bulletin.update_instructions = self.update.into_text();
        bulletin
    }
}

/// Incremental digest parser.
///
/// Feed lines in order with [`DigestParser::feed_line`], then call
/// [`DigestParser::finish`] to close the last notice. Lines before the
/// first header are ignored.
#[derive(Debug, Default)]
pub struct DigestParser {
    current: Option<OpenNotice>,
    finished: Vec<Bulletin>,
}

impl DigestParser {
    /// Create a parser with no open notice
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one line (without its line terminator)
    pub fn feed_line(&mut self, line: &str) {
        if is_header(line) {
            if let Some(open) = self.current.take() {
                self.finished.push(open.finalize());
            }
            self.current = Some(OpenNotice::from_header(line));
        } else if let Some(open) = self.current.as_mut() {
            open.handle_line(line);
        }
    }

    /// Number of notices completed so far (the open one excluded)
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.finished.len()
    }

    /// Close the open notice and return all notices in input order
    #[must_use]
    pub fn finish(mut self) -> Vec<Bulletin> {
        if let Some(open) = self.current.take() {
            self.finished.push(open.finalize());
        }
        self.finished
    }
}

/// Parse a whole digest held in memory
#[must_use]
pub fn parse_digest_str(content: &str) -> Vec<Bulletin> {
    let mut parser = DigestParser::new();
    for line in content.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parse a digest from a reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; mail
/// archives frequently mix encodings.
pub fn parse_digest_reader<R: BufRead>(mut reader: R) -> std::io::Result<Vec<Bulletin>> {
    let mut parser = DigestParser::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        parser.feed_line(line.trim_end_matches(['\n', '\r']));
    }

    Ok(parser.finish())
}
