//! Repository scanning.

use crate::core::{FileOperation, FileOperationError, FileResultExt, Result};
use crate::index::{IndexRecord, PackageKind};
use crate::utils::fs::{AtomicFileWriter, is_existing_dir};
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Scans repository trees for packages and writes their index.
///
/// A package is any directory strictly below the repository root that holds
/// the marker file. Its synopsis is the first line of its readme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuilder {
    marker_file: String,
    readme_file: String,
    index_file: String,
}

impl IndexBuilder {
    pub fn new(
        marker_file: impl Into<String>,
        readme_file: impl Into<String>,
        index_file: impl Into<String>,
    ) -> Self {
        Self {
            marker_file: marker_file.into(),
            readme_file: readme_file.into(),
            index_file: index_file.into(),
        }
    }

    /// Location of the index file for the repository at `repo_root`.
    pub fn index_path(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.index_file)
    }

    /// Lazily yield one record per package under `repo_root`.
    ///
    /// Directories are visited in file-name order, so records come out sorted
    /// by relative path component-wise. Symlinks are not followed. Package
    /// paths containing whitespace cannot be stored in an index line and are
    /// skipped with a warning.
    pub fn records<'a>(
        &'a self,
        repo_root: &'a Path,
    ) -> impl Iterator<Item = Result<IndexRecord>> + 'a {
        WalkDir::new(repo_root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.record_for(repo_root, &entry).transpose(),
                Err(err) => Some(Err(walk_error(repo_root, err).into())),
            })
    }

    /// Collect all records under `repo_root`.
    pub fn build(&self, repo_root: &Path) -> Result<Vec<IndexRecord>> {
        self.records(repo_root).collect()
    }

    /// Rebuild the index file of `repo_root`, returning the package count.
    pub fn write_index(&self, repo_root: &Path) -> Result<usize> {
        self.write_index_with(repo_root, |_, _| {})
    }

    /// Rebuild the index file, calling `on_record` with the running count
    /// after each record is written.
    ///
    /// Records are streamed to a temporary file that replaces the previous
    /// index only once the scan has finished. On error the old index stays.
    pub fn write_index_with(
        &self,
        repo_root: &Path,
        mut on_record: impl FnMut(usize, &IndexRecord),
    ) -> Result<usize> {
        if !is_existing_dir(repo_root) {
            return Err(FileOperationError::new(
                FileOperation::Walk,
                repo_root,
                "scanning repository",
                io::Error::new(io::ErrorKind::NotFound, "repository directory does not exist"),
            )
            .into());
        }

        let index_path = self.index_path(repo_root);
        debug!("Rebuilding index {}", index_path.display());

        let mut writer = AtomicFileWriter::create(&index_path)?;
        let mut count = 0;
        for record in self.records(repo_root) {
            let record = record?;
            writeln!(writer, "{record}").with_file_context(
                FileOperation::Write,
                &index_path,
                "writing index record",
            )?;
            count += 1;
            on_record(count, &record);
        }
        writer.commit()?;

        info!("Indexed {count} packages in {}", repo_root.display());
        Ok(count)
    }

    fn record_for(&self, repo_root: &Path, entry: &DirEntry) -> Result<Option<IndexRecord>> {
        if !entry.file_type().is_dir() {
            return Ok(None);
        }

        let dir = entry.path();
        if !self.is_package_dir(dir) {
            return Ok(None);
        }

        let Some(relative) = relative_path(repo_root, dir) else {
            warn!("Skipping package with non UTF-8 path: {}", dir.display());
            return Ok(None);
        };
        if relative.chars().any(char::is_whitespace) {
            warn!("Skipping package '{relative}': whitespace in package paths is not supported");
            return Ok(None);
        }

        let synopsis = self.read_synopsis(dir)?;
        debug!("Found package {relative}");
        Ok(Some(IndexRecord::new(PackageKind::Source, relative, synopsis)))
    }

    /// Whether `dir` holds the package marker file.
    pub fn is_package_dir(&self, dir: &Path) -> bool {
        dir.join(&self.marker_file).is_file()
    }

    /// First line of the package readme, or empty when there is none.
    pub fn read_synopsis(&self, package_dir: &Path) -> Result<String> {
        let readme = package_dir.join(&self.readme_file);
        let bytes = match fs::read(&readme) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => {
                return Err(
                    FileOperationError::new(FileOperation::Read, &readme, "reading readme", e)
                        .into(),
                );
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        let first = text.lines().next().unwrap_or_default();
        Ok(first.trim_end_matches('\r').to_string())
    }
}

/// `/`-joined path of `dir` relative to `root`.
fn relative_path(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

fn walk_error(repo_root: &Path, err: walkdir::Error) -> FileOperationError {
    let path = err.path().unwrap_or(repo_root).to_path_buf();
    let source = io::Error::from(err);
    FileOperationError::new(FileOperation::Walk, path, "scanning repository", source)
}
