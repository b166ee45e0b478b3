//! The user config store.
//!
//! The user config file is a flat, line-oriented list of entries:
//!
//! ```text
//! # subscriptions
//! repo = alice          # work packages
//! repo = /srv/shared/repoman
//!
//! # installed packages
//! vim
//! alice:net/curl
//! ```
//!
//! A line is either `key = value`, a bare `key` (an installed-package
//! marker), or blank. Everything from the first `#` to the end of the line is
//! a comment; there is no escape for `#`. The only reserved key is `repo`
//! ([`ConfigOption::Repo`]).
//!
//! The file is loaded into a [`ConfigDocument`], an ordered list of
//! [`ConfigLine`]s that keeps each line's original text. Untouched lines are
//! written back byte-for-byte. New entries are appended; removal blanks the
//! entry in place and keeps any trailing comment, so the line count never
//! shrinks.
//!
//! [`ConfigStore`] wraps a document path and exposes the read and write
//! operations. Every operation re-reads the file; nothing is cached between
//! calls. Writes replace the file atomically, but concurrent writers are not
//! serialized: the last writer wins.

mod document;
mod store_io;
mod store_mutations;
mod store_queries;

#[cfg(test)]
mod store_tests;

pub use document::{ConfigDocument, ConfigLine};

use std::fmt;
use std::path::{Path, PathBuf};

/// Reserved option names in the user config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    /// `repo = <identifier>`: a repository subscription.
    Repo,
}

impl ConfigOption {
    /// All reserved options.
    pub const ALL: [Self; 1] = [Self::Repo];

    /// The key as written in the file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
        }
    }

    /// The option named by `key`, if it is reserved.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_str() == key)
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the user config file.
///
/// `value` is `None` for bare keys (lines without a separator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Option<String>,
}

impl ConfigEntry {
    /// An `option = value` entry.
    pub fn option(option: ConfigOption, value: impl Into<String>) -> Self {
        Self {
            key: option.as_str().to_string(),
            value: Some(value.into()),
        }
    }

    /// A bare key entry.
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// The reserved option this entry belongs to, if any.
    pub fn reserved_option(&self) -> Option<ConfigOption> {
        ConfigOption::from_key(&self.key)
    }

    /// Whether this entry is `option = value`.
    pub fn matches(&self, option: ConfigOption, value: &str) -> bool {
        self.key == option.as_str() && self.value.as_deref() == Some(value)
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} {value}", self.key, crate::constants::ENTRY_SEPARATOR),
            None => f.write_str(&self.key),
        }
    }
}

/// Read and write access to the user config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// A store backed by the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
