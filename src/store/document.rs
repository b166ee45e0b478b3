//! Structured form of the user config file.

use crate::constants::{COMMENT_MARKER, ENTRY_SEPARATOR};
use crate::store::{ConfigEntry, ConfigOption};
use std::fmt;

/// One physical line of the user config file.
///
/// The original text is kept so an unmodified line renders exactly as it was
/// read, whitespace and comment included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    raw: String,
    entry: Option<ConfigEntry>,
    comment: Option<String>,
    /// The line ended in `\r\n`; `raw` keeps the `\r`.
    crlf: bool,
    modified: bool,
}

impl ConfigLine {
    /// Parse one line (without its line terminator).
    ///
    /// Lines that are blank or comment-only, and lines with a separator but an
    /// empty key, carry no entry.
    pub fn parse(raw: &str) -> Self {
        let (body, crlf) = match raw.strip_suffix('\r') {
            Some(body) => (body, true),
            None => (raw, false),
        };
        let (content, comment) = match body.find(COMMENT_MARKER) {
            Some(pos) => (&body[..pos], Some(body[pos..].to_string())),
            None => (body, None),
        };

        let entry = match content.split_once(ENTRY_SEPARATOR) {
            Some((key, value)) => {
                let key = key.trim();
                (!key.is_empty()).then(|| ConfigEntry {
                    key: key.to_string(),
                    value: Some(value.trim().to_string()),
                })
            }
            None => {
                let key = content.trim();
                (!key.is_empty()).then(|| ConfigEntry::bare(key))
            }
        };

        Self {
            raw: raw.to_string(),
            entry,
            comment,
            crlf,
            modified: false,
        }
    }

    /// A freshly appended line holding `entry`.
    pub fn from_entry(entry: ConfigEntry) -> Self {
        Self {
            raw: entry.to_string(),
            entry: Some(entry),
            comment: None,
            crlf: false,
            modified: false,
        }
    }

    pub fn entry(&self) -> Option<&ConfigEntry> {
        self.entry.as_ref()
    }

    /// The trailing comment, starting at the `#`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Drop the entry from this line, keeping its comment.
    pub fn blank(&mut self) {
        self.entry = None;
        self.modified = true;
    }

    /// The text written back to the file.
    pub fn render(&self) -> String {
        if !self.modified {
            return self.raw.clone();
        }

        let mut text = match (&self.entry, &self.comment) {
            (Some(entry), Some(comment)) => format!("{entry} {comment}"),
            (Some(entry), None) => entry.to_string(),
            (None, Some(comment)) => comment.clone(),
            (None, None) => String::new(),
        };
        if self.crlf {
            text.push('\r');
        }
        text
    }
}

/// The user config file as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<ConfigLine>,
    trailing_newline: bool,
}

impl ConfigDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the full text of a config file.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }

        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(text);

        Self {
            lines: body.split('\n').map(ConfigLine::parse).collect(),
            trailing_newline,
        }
    }

    /// Number of physical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.lines.iter().filter_map(ConfigLine::entry)
    }

    /// Append a line holding `entry`.
    pub fn push(&mut self, entry: ConfigEntry) {
        self.lines.push(ConfigLine::from_entry(entry));
        self.trailing_newline = true;
    }

    /// Blank the first line holding `option = value`.
    ///
    /// Returns the zero-based index of the blanked line, or `None` when no
    /// line matched. An unterminated last line that renders empty gets a
    /// line terminator so it still exists on reload.
    pub fn blank_first(&mut self, option: ConfigOption, value: &str) -> Option<usize> {
        let index = self
            .lines
            .iter()
            .position(|line| line.entry().is_some_and(|entry| entry.matches(option, value)))?;
        self.lines[index].blank();
        if index + 1 == self.lines.len() && self.lines[index].render().is_empty() {
            self.trailing_newline = true;
        }
        Some(index)
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.render())?;
        }
        if self.trailing_newline && !self.lines.is_empty() {
            f.write_str("\n")?;
        }
        Ok(())
    }
}
