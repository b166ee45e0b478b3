//! Repository tree fixtures.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::constants::{DEFAULT_INDEX_FILE, DEFAULT_MARKER_FILE, DEFAULT_README_FILE};

/// A repository directory populated with packages.
///
/// Uses the default marker, readme and index file names.
#[derive(Debug)]
pub struct RepoFixture {
    _temp: Option<TempDir>,
    root: PathBuf,
}

impl RepoFixture {
    /// A repository in a fresh temporary directory, removed on drop.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path().to_path_buf();
        Ok(Self {
            _temp: Some(temp),
            root,
        })
    }

    /// A repository at `root`, created if missing. The caller owns cleanup.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating repository {}", root.display()))?;
        Ok(Self {
            _temp: None,
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create a package directory with a marker file and, optionally, a
    /// readme.
    pub fn add_package(&self, relative: &str, readme: Option<&str>) -> Result<PathBuf> {
        let dir = self.root.join(relative);
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating package {}", dir.display()))?;
        fs::write(dir.join(DEFAULT_MARKER_FILE), "#!/bin/sh\n")?;
        if let Some(readme) = readme {
            fs::write(dir.join(DEFAULT_README_FILE), readme)?;
        }
        Ok(dir)
    }

    /// Write the index file verbatim, one line per record.
    pub fn write_index(&self, lines: &[&str]) -> Result<PathBuf> {
        let path = self.root.join(DEFAULT_INDEX_FILE);
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content)
            .with_context(|| format!("writing index {}", path.display()))?;
        Ok(path)
    }

    /// Regenerate the index from the packages on disk.
    pub fn reindex(&self) -> Result<usize> {
        let builder =
            crate::index::IndexBuilder::new(DEFAULT_MARKER_FILE, DEFAULT_README_FILE, DEFAULT_INDEX_FILE);
        Ok(builder.write_index(&self.root)?)
    }
}
