//! File metadata helpers.

use crate::core::{FileOperation, FileOperationError, FileResultExt};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Returns the modification time of a file.
pub fn get_modified_time(path: &Path) -> Result<SystemTime, FileOperationError> {
    let metadata = fs::metadata(path).with_file_context(
        FileOperation::Metadata,
        path,
        "reading modification time",
    )?;

    metadata.modified().with_file_context(
        FileOperation::Metadata,
        path,
        "reading modification time",
    )
}

/// `true` if `path` exists and is a directory (symlinks followed).
pub fn is_existing_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_modified_time() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("file");
        std::fs::write(&path, "x").unwrap();
        let mtime = get_modified_time(&path).unwrap();
        assert!(mtime <= SystemTime::now());
        assert!(get_modified_time(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_is_existing_dir() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert!(is_existing_dir(temp.path()));
        assert!(!is_existing_dir(&file));
        assert!(!is_existing_dir(&temp.path().join("missing")));
    }
}
