//! Error handling for repoman
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** ([`RepomanError`]) for every failure the core
//!    components can report, so callers can match on the failure kind.
//! 2. **User-friendly output** ([`ErrorContext`]) for the CLI: a one-line
//!    colored message, optional details and suggestion, and a distinct exit
//!    code per failure kind.
//!
//! Reads of files that do not exist (the user config, the trusted-repos list)
//! are *not* errors: they yield empty results. Everything else surfaces to the
//! immediate caller.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 1 | unexpected failure |
//! | 2 | bad command line (reported by clap) |
//! | 3 | repository already subscribed |
//! | 4 | entry, repository or package not found |
//! | 5 | file could not be read or written |
//! | 6 | repository not subscribed (or the stable repository) |
//! | 7 | repository index unreadable |
//! | 8 | malformed input line |
//! | 9 | invalid entry, template or settings |
//!
//! # Examples
//!
//! ```rust,no_run
//! use repoman_cli::core::{RepomanError, user_friendly_error};
//!
//! let err = anyhow::Error::from(RepomanError::NotSubscribed {
//!     identifier: "alice".to_string(),
//! });
//! let ctx = user_friendly_error(err);
//! assert_eq!(ctx.exit_code(), 6);
//! ctx.display();
//! ```

use crate::core::file_error::FileOperationError;
use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Exit codes reported by the `repoman` binary.
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const BAD_COMMAND: i32 = 2;
    pub const ALREADY_SUBSCRIBED: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const IO_FAILURE: i32 = 5;
    pub const NOT_SUBSCRIBED: i32 = 6;
    pub const REPO_UNREADABLE: i32 = 7;
    pub const PARSE_ERROR: i32 = 8;
    pub const INVALID_INPUT: i32 = 9;
}

/// Result alias used by the core components.
pub type Result<T, E = RepomanError> = std::result::Result<T, E>;

/// The main error type for repoman operations.
///
/// # Error Categories
///
/// - **Subscriptions**: [`AlreadySubscribed`], [`NotSubscribed`], [`StableRepository`]
/// - **Lookups**: [`RepoNotFound`], [`EntryNotFound`], [`PackageNotFound`]
/// - **Indices**: [`RepoUnreadable`], [`Parse`]
/// - **Input validation**: [`InvalidEntry`], [`InvalidTemplate`], [`ConfigError`]
/// - **File system**: [`FileOperation`]
///
/// [`AlreadySubscribed`]: RepomanError::AlreadySubscribed
/// [`NotSubscribed`]: RepomanError::NotSubscribed
/// [`StableRepository`]: RepomanError::StableRepository
/// [`RepoNotFound`]: RepomanError::RepoNotFound
/// [`EntryNotFound`]: RepomanError::EntryNotFound
/// [`PackageNotFound`]: RepomanError::PackageNotFound
/// [`RepoUnreadable`]: RepomanError::RepoUnreadable
/// [`Parse`]: RepomanError::Parse
/// [`InvalidEntry`]: RepomanError::InvalidEntry
/// [`InvalidTemplate`]: RepomanError::InvalidTemplate
/// [`ConfigError`]: RepomanError::ConfigError
/// [`FileOperation`]: RepomanError::FileOperation
#[derive(Error, Debug)]
pub enum RepomanError {
    /// The repository is already part of the subscribed set
    #[error("Repository '{identifier}' is already subscribed")]
    AlreadySubscribed {
        /// Raw repository identifier as given by the user
        identifier: String,
    },

    /// The repository is not part of the subscribed set
    #[error("Repository '{identifier}' is not subscribed")]
    NotSubscribed {
        /// Raw repository identifier as given by the user
        identifier: String,
    },

    /// Attempt to unsubscribe from the always-subscribed stable repository
    #[error("The stable repository '{identifier}' cannot be unsubscribed")]
    StableRepository {
        /// The stable repository identifier
        identifier: String,
    },

    /// The identifier resolved to a path that is not an existing directory
    #[error("Repository '{identifier}' not found at {path}")]
    RepoNotFound {
        /// Raw repository identifier
        identifier: String,
        /// The resolved path that was checked
        path: String,
    },

    /// No config line matched the key/value pair
    #[error("No entry '{key} = {value}' found in user config")]
    EntryNotFound {
        /// Entry key (option name)
        key: String,
        /// Entry value
        value: String,
    },

    /// A package directory does not exist
    #[error("Package '{package}' not found at {path}")]
    PackageNotFound {
        /// The package token as given by the user
        package: String,
        /// The resolved package path
        path: String,
    },

    /// The repository index is missing or corrupt
    #[error("Cannot read index of repository '{identifier}' at {path}: {reason}")]
    RepoUnreadable {
        /// Raw repository identifier
        identifier: String,
        /// Path of the index file
        path: String,
        /// What went wrong
        reason: String,
    },

    /// A line of an input file could not be parsed
    #[error("Malformed {what} on line {line}: {reason}")]
    Parse {
        /// What kind of content was being parsed, e.g. "index record"
        what: String,
        /// One-based line number
        line: usize,
        /// Why parsing failed
        reason: String,
    },

    /// A key or value cannot be stored in the line-oriented config format
    #[error("Invalid config entry '{key}': {reason}")]
    InvalidEntry {
        /// Entry key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// The unstable repository template is unusable
    #[error("Invalid repository template '{template}': {reason}")]
    InvalidTemplate {
        /// The template text
        template: String,
        /// Why it was rejected
        reason: String,
    },

    /// Settings could not be loaded or are inconsistent
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// A file could not be read or written
    #[error(transparent)]
    FileOperation(#[from] FileOperationError),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl RepomanError {
    /// The process exit code reported for this failure kind.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadySubscribed {
                ..
            } => exit_codes::ALREADY_SUBSCRIBED,
            Self::RepoNotFound {
                ..
            }
            | Self::EntryNotFound {
                ..
            }
            | Self::PackageNotFound {
                ..
            } => exit_codes::NOT_FOUND,
            Self::FileOperation(_) => exit_codes::IO_FAILURE,
            Self::NotSubscribed {
                ..
            }
            | Self::StableRepository {
                ..
            } => exit_codes::NOT_SUBSCRIBED,
            Self::RepoUnreadable {
                ..
            } => exit_codes::REPO_UNREADABLE,
            Self::Parse {
                ..
            } => exit_codes::PARSE_ERROR,
            Self::InvalidEntry {
                ..
            }
            | Self::InvalidTemplate {
                ..
            }
            | Self::ConfigError {
                ..
            } => exit_codes::INVALID_INPUT,
            Self::Other {
                ..
            } => exit_codes::FAILURE,
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// Wraps a [`RepomanError`] with optional details and a suggestion. When
/// displayed, the error is shown in red, details in yellow and the suggestion
/// in green.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: RepomanError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: RepomanError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Exit code of the wrapped error.
    pub const fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
///
/// Typed [`RepomanError`]s keep their kind (and exit code); anything else is
/// reported as [`RepomanError::Other`] with the full cause chain flattened
/// into one line.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<RepomanError>() {
        Ok(repoman_error) => create_error_context(repoman_error),
        Err(error) => ErrorContext::new(RepomanError::Other {
            message: format!("{error:#}"),
        }),
    }
}

fn create_error_context(error: RepomanError) -> ErrorContext {
    match &error {
        RepomanError::AlreadySubscribed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'repoman repo list' to see current subscriptions"),
        RepomanError::NotSubscribed {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'repoman repo list' to see current subscriptions"),
        RepomanError::StableRepository {
            ..
        } => ErrorContext::new(error)
            .with_details("The stable repository is always subscribed"),
        RepomanError::RepoNotFound {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Check the repository name, or pass an absolute path to the repository directory",
        ),
        RepomanError::RepoUnreadable {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Rebuild the index with 'repoman repo index <name>'"),
        RepomanError::FileOperation(file_error) => {
            let details = file_error.user_message();
            ErrorContext::new(error).with_details(details)
        }
        RepomanError::InvalidEntry {
            ..
        } => ErrorContext::new(error).with_details(
            "Keys may not contain '=', '#' or surrounding whitespace; values may not contain '#'",
        ),
        RepomanError::InvalidTemplate {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Set 'unstable_template' in settings.toml to a path containing exactly one '{name}'",
        ),
        _ => ErrorContext::new(error),
    }
}
