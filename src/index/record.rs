//! Index records and the index file format.
//!
//! One record per line: `kind relative_path [synopsis...]`. The kind and the
//! path are single whitespace-free words; the synopsis is the rest of the line
//! after the separator following the path, kept verbatim.

use crate::core::{FileOperation, FileResultExt, RepomanError, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Kind of package unit found in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// A source-style package: a directory holding the marker file.
    Source,
}

impl PackageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "source" => Ok(Self::Source),
            other => Err(format!("unknown package kind '{other}'")),
        }
    }
}

/// One package listed in a repository index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndexRecord {
    pub kind: PackageKind,
    /// Package directory relative to the repository root, `/`-separated.
    pub path: String,
    /// First line of the package readme, or empty.
    pub synopsis: String,
}

impl IndexRecord {
    pub fn new(kind: PackageKind, path: impl Into<String>, synopsis: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            synopsis: synopsis.into(),
        }
    }

    /// Parse one index line. `line_number` is one-based and only used in
    /// error messages.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let parse_error = |reason: String| RepomanError::Parse {
            what: "index record".to_string(),
            line: line_number,
            reason,
        };

        let line = line.trim_end_matches('\r');
        let Some((kind, rest)) = line.split_once(char::is_whitespace) else {
            return Err(parse_error(format!("expected 'kind path [synopsis]', got '{line}'")));
        };
        let kind = kind.parse::<PackageKind>().map_err(parse_error)?;

        let rest = rest.trim_start();
        let (path, synopsis) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if path.is_empty() {
            return Err(parse_error("missing package path".to_string()));
        }

        Ok(Self::new(kind, path, synopsis))
    }
}

impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)?;
        if !self.synopsis.is_empty() {
            write!(f, " {}", self.synopsis)?;
        }
        Ok(())
    }
}

/// Parse index file contents. Blank lines are skipped.
pub fn parse_index(text: &str) -> Result<Vec<IndexRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| IndexRecord::parse_line(line, i + 1))
        .collect()
}

/// Read and parse an index file.
///
/// # Errors
///
/// [`RepomanError::FileOperation`] if the file cannot be read (including
/// when it does not exist); [`RepomanError::Parse`] for a malformed line.
pub fn read_index(path: &Path) -> Result<Vec<IndexRecord>> {
    let text = fs::read_to_string(path).with_file_context(
        FileOperation::Read,
        path,
        "reading repository index",
    )?;
    parse_index(&text)
}
