//! Structured file system error handling for repoman
//!
//! File operations capture their context at the operation site (what was
//! being done, to which file, and why) instead of relying on the bare
//! [`std::io::Error`] message, which never names the path.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The kind of file system operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
    Metadata,
    CreateDir,
    Walk,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Metadata => write!(f, "getting metadata of"),
            FileOperation::CreateDir => write!(f, "creating directory"),
            FileOperation::Walk => write!(f, "scanning"),
        }
    }
}

/// A file operation failure with the path and purpose attached.
#[derive(Error, Debug)]
#[error("Failed {operation} '{}' ({purpose}): {source}", file_path.display())]
pub struct FileOperationError {
    /// What was being done
    pub operation: FileOperation,
    /// The file or directory involved
    pub file_path: PathBuf,
    /// Why the operation was performed, e.g. "loading user config"
    pub purpose: String,
    /// The underlying I/O failure
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// Returns `true` when the failure is the file simply not existing.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == std::io::ErrorKind::NotFound
    }

    /// The failure plus a hint for the common I/O error kinds.
    pub fn user_message(&self) -> String {
        let hint = match self.source.kind() {
            std::io::ErrorKind::NotFound => "nothing exists at this path".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                format!("check the permissions of {}", self.file_path.display())
            }
            std::io::ErrorKind::IsADirectory => "expected a file, found a directory".to_string(),
            std::io::ErrorKind::InvalidData => "the file is not valid UTF-8".to_string(),
            _ => self.source.to_string(),
        };

        format!("{} {} for {}: {hint}", self.operation, self.file_path.display(), self.purpose)
    }
}

/// Attach file context to an [`std::io::Result`].
pub trait FileResultExt<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|io_error| FileOperationError::new(operation, file_path, purpose, io_error))
    }
}
