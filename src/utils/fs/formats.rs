//! Text file reading.

use crate::core::{FileOperation, FileOperationError, FileResultExt};
use std::fs;
use std::path::Path;

/// Reads a text file, failing if it does not exist.
pub fn read_text_file(path: &Path, purpose: &str) -> Result<String, FileOperationError> {
    fs::read_to_string(path).with_file_context(FileOperation::Read, path, purpose)
}

/// Reads a text file, treating a missing file as `None`.
///
/// Any other failure (permissions, invalid UTF-8) is still an error.
pub fn read_optional_text_file(
    path: &Path,
    purpose: &str,
) -> Result<Option<String>, FileOperationError> {
    match read_text_file(path, purpose) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
