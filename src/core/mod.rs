//! Core types and error handling for repoman.
//!
//! - [`error`] - [`RepomanError`], [`ErrorContext`] and exit codes
//! - [`file_error`] - file operation errors carrying path and purpose

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, RepomanError, Result, exit_codes, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
