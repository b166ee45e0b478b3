//! Atomic file write operations using temp-and-rename strategy.
//!
//! Content is written to a temporary file in the target's directory, synced,
//! and renamed over the target. Readers see either the old or the new file,
//! and a failed write leaves the target untouched.

use crate::core::{FileOperation, FileOperationError, FileResultExt};
use crate::utils::fs::ensure_dir;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes a string to a file atomically.
pub fn safe_write(path: &Path, content: &str) -> Result<(), FileOperationError> {
    atomic_write(path, content.as_bytes())
}

/// Writes bytes to a file atomically, creating parent directories as needed.
///
/// Permissions of an existing target are carried over to the new file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), FileOperationError> {
    let mut writer = AtomicFileWriter::create(path)?;
    writer.write_all(content).with_file_context(FileOperation::Write, path, "writing temp file")?;
    writer.commit()
}

/// A buffered writer whose output replaces the target file only on [`commit`].
///
/// Dropping the writer without committing discards everything written. This
/// lets large outputs (such as a repository index) be streamed to disk without
/// holding them in memory while still replacing the target atomically.
///
/// [`commit`]: AtomicFileWriter::commit
#[derive(Debug)]
pub struct AtomicFileWriter {
    target: PathBuf,
    inner: BufWriter<NamedTempFile>,
}

impl AtomicFileWriter {
    /// Opens a temporary file next to `target`.
    pub fn create(target: &Path) -> Result<Self, FileOperationError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_dir(&dir)?;

        let temp = NamedTempFile::new_in(&dir).with_file_context(
            FileOperation::Write,
            &dir,
            "creating temp file",
        )?;

        Ok(Self {
            target: target.to_path_buf(),
            inner: BufWriter::new(temp),
        })
    }

    /// Flushes, syncs and renames the temporary file over the target.
    pub fn commit(self) -> Result<(), FileOperationError> {
        let target = self.target;
        let temp = self.inner.into_inner().map_err(|e| {
            FileOperationError::new(
                FileOperation::Write,
                &target,
                "flushing temp file",
                e.into_error(),
            )
        })?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions()).with_file_context(
                FileOperation::Write,
                &target,
                "preserving permissions",
            )?;
        }

        temp.as_file().sync_all().with_file_context(
            FileOperation::Write,
            &target,
            "syncing temp file",
        )?;

        temp.persist(&target).map_err(|e| {
            FileOperationError::new(FileOperation::Write, &target, "replacing file", e.error)
        })?;

        Ok(())
    }
}

impl Write for AtomicFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
