//! Directory creation helpers.

use crate::core::{FileOperation, FileOperationError, FileResultExt};
use std::fs;
use std::path::Path;

/// Ensures a directory exists, creating it and its parents if needed.
///
/// Fails if the path exists but is not a directory.
pub fn ensure_dir(path: &Path) -> Result<(), FileOperationError> {
    if !path.exists() {
        fs::create_dir_all(path).with_file_context(
            FileOperation::CreateDir,
            path,
            "creating directory",
        )?;
    } else if !path.is_dir() {
        return Err(FileOperationError::new(
            FileOperation::CreateDir,
            path,
            "creating directory",
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        ));
    }
    Ok(())
}
