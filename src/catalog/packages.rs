//! Package views across repositories.

use crate::catalog::RepoCatalog;
use crate::core::{RepomanError, Result};
use crate::index::IndexRecord;
use crate::repo::PackageRef;
use crate::utils::fs::is_existing_dir;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

/// A package in the merged listing of subscribed repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Identifier of the repository the package was listed in.
    pub repository: String,
    /// Token that addresses this package on the command line.
    pub token: String,
    pub record: IndexRecord,
    pub path: PathBuf,
}

/// An installed-package marker from the user config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    pub token: String,
    pub reference: PackageRef,
    pub path: PathBuf,
    /// Whether the package directory still exists.
    pub exists: bool,
}

/// Details about one package, as shown by `show <package>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub token: String,
    pub reference: PackageRef,
    pub repository_path: PathBuf,
    pub path: PathBuf,
    pub synopsis: String,
    pub installed: bool,
}

impl RepoCatalog {
    /// The token addressing `name` inside the repository `identifier`.
    ///
    /// Stable packages are addressed by bare name and repositories with a
    /// word-character identifier by `repo:name`. Anything else (absolute
    /// paths, names with punctuation) falls back to the package's full path,
    /// which also parses back to the same directory.
    pub fn package_token(&self, identifier: &str, name: &str) -> String {
        if self.resolver.is_stable(identifier) {
            name.to_string()
        } else if PackageRef::is_valid_prefix(identifier) {
            PackageRef {
                repo: identifier.to_string(),
                name: name.to_string(),
            }
            .qualified()
        } else {
            self.repo_path(identifier).join(name).display().to_string()
        }
    }

    /// Packages listed in one repository's index.
    pub fn repo_packages(&self, identifier: &str) -> Result<Vec<CatalogEntry>> {
        let repo_path = self.repo_path(identifier);
        Ok(self
            .read_repo_index(identifier)?
            .into_iter()
            .map(|record| CatalogEntry {
                repository: identifier.to_string(),
                token: self.package_token(identifier, &record.path),
                path: repo_path.join(&record.path),
                record,
            })
            .collect())
    }

    /// All packages of all subscribed repositories.
    ///
    /// Repositories are read in sorted identifier order. A package directory
    /// reachable through several subscriptions is listed once, under the
    /// first. Repositories whose index cannot be read are skipped with a
    /// warning.
    pub fn packages(&self) -> Result<Vec<CatalogEntry>> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();

        for identifier in self.subscribed_repos()? {
            let entries = match self.repo_packages(&identifier) {
                Ok(entries) => entries,
                Err(e @ RepomanError::RepoUnreadable { .. }) => {
                    warn!("Skipping repository: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            merged.extend(entries.into_iter().filter(|entry| seen.insert(entry.path.clone())));
        }

        Ok(merged)
    }

    /// Installed-package markers, sorted by token.
    pub fn installed_packages(&self) -> Result<Vec<InstalledPackage>> {
        Ok(self
            .store
            .list_bare_keys()?
            .into_iter()
            .map(|token| {
                let reference = PackageRef::parse(&token);
                let path = reference.to_path(&self.resolver);
                InstalledPackage {
                    exists: is_existing_dir(&path),
                    token,
                    reference,
                    path,
                }
            })
            .collect())
    }

    /// Look up a package by token.
    ///
    /// # Errors
    ///
    /// [`RepomanError::PackageNotFound`] if the token names no package
    /// directory: an empty name (the repository root), or a directory
    /// without the package marker file.
    pub fn find_package(&self, token: &str) -> Result<PackageInfo> {
        let reference = PackageRef::parse(token);
        let path = reference.to_path(&self.resolver);
        if reference.name.trim_matches('/').is_empty() || !self.index.is_package_dir(&path) {
            return Err(RepomanError::PackageNotFound {
                package: token.to_string(),
                path: path.display().to_string(),
            });
        }

        let installed = self.installed_packages()?.iter().any(|p| p.path == path);

        Ok(PackageInfo {
            token: token.to_string(),
            repository_path: reference.repo_path(&self.resolver),
            synopsis: self.index.read_synopsis(&path)?,
            reference,
            path,
            installed,
        })
    }
}
