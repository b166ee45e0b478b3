//! Repository summaries and the trusted-repos list.

use crate::catalog::RepoCatalog;
use crate::constants::COMMENT_MARKER;
use crate::core::{RepomanError, Result};
use crate::index::{IndexRecord, read_index};
use crate::utils::fs::{get_modified_time, read_optional_text_file};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Overview of one repository, as shown by `repo show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub identifier: String,
    pub path: PathBuf,
    /// Packages listed in the repository index.
    pub available_count: usize,
    /// Installed-package markers belonging to this repository.
    pub installed_count: usize,
    pub is_trusted: bool,
    pub is_subscribed: bool,
    /// Modification time of the index file.
    pub last_indexed_at: DateTime<Local>,
}

impl RepoCatalog {
    /// Read the index of the repository named by `identifier`.
    ///
    /// # Errors
    ///
    /// [`RepomanError::RepoUnreadable`] if the index is missing, unreadable
    /// or malformed.
    pub fn read_repo_index(&self, identifier: &str) -> Result<Vec<IndexRecord>> {
        let index_path = self.index_path(identifier);
        read_index(&index_path).map_err(|e| RepomanError::RepoUnreadable {
            identifier: identifier.to_string(),
            path: index_path.display().to_string(),
            reason: unreadable_reason(&e),
        })
    }

    /// Entries of the trusted-repos list. A missing list is empty.
    pub fn trusted_repos(&self) -> Result<Vec<String>> {
        let Some(text) = read_optional_text_file(&self.trusted_repos_file, "reading trusted repos")?
        else {
            debug!("No trusted-repos list at {}", self.trusted_repos_file.display());
            return Ok(Vec::new());
        };

        Ok(text
            .lines()
            .map(|line| line.split(COMMENT_MARKER).next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Whether the resolved path of `identifier` appears verbatim in the
    /// trusted-repos list.
    pub fn is_trusted(&self, identifier: &str) -> Result<bool> {
        let path = self.repo_path(identifier);
        let path = path.to_string_lossy();
        Ok(self.trusted_repos()?.iter().any(|trusted| *trusted == path))
    }

    /// Summarize the repository named by `identifier`.
    ///
    /// The repository need not be subscribed, but it must have a readable
    /// index.
    pub fn repo_summary(&self, identifier: &str) -> Result<RepoSummary> {
        let records = self.read_repo_index(identifier)?;
        let index_path = self.index_path(identifier);
        let modified =
            get_modified_time(&index_path).map_err(|e| RepomanError::RepoUnreadable {
                identifier: identifier.to_string(),
                path: index_path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(RepoSummary {
            identifier: identifier.to_string(),
            path: self.repo_path(identifier),
            available_count: records.len(),
            installed_count: self.installed_package_count(identifier)?,
            is_trusted: self.is_trusted(identifier)?,
            is_subscribed: self.is_subscribed(identifier)?,
            last_indexed_at: DateTime::<Local>::from(modified),
        })
    }
}

fn unreadable_reason(error: &RepomanError) -> String {
    match error {
        RepomanError::FileOperation(e) if e.is_not_found() => "index file does not exist".into(),
        RepomanError::FileOperation(e) => e.source.to_string(),
        other => other.to_string(),
    }
}
