//! The repository catalog.
//!
//! [`RepoCatalog`] combines the user config store, the repository resolver
//! and the index builder into the operations the command line exposes:
//!
//! - subscription management ([`subscribed_repos`], [`add_subscription`],
//!   [`remove_subscription`])
//! - per-repository summaries ([`repo_summary`]) with trust and installed
//!   counts
//! - the merged package view across all subscriptions ([`packages`]) and
//!   installed-package lookups ([`installed_packages`], [`find_package`])
//!
//! The set of subscribed repositories is the stable repository plus every
//! `repo` entry in the user config, compared by raw identifier. Two names
//! that resolve to the same directory are still two subscriptions.
//!
//! The catalog holds no state of its own; each call re-reads the files it
//! needs.
//!
//! [`subscribed_repos`]: RepoCatalog::subscribed_repos
//! [`add_subscription`]: RepoCatalog::add_subscription
//! [`remove_subscription`]: RepoCatalog::remove_subscription
//! [`repo_summary`]: RepoCatalog::repo_summary
//! [`packages`]: RepoCatalog::packages
//! [`installed_packages`]: RepoCatalog::installed_packages
//! [`find_package`]: RepoCatalog::find_package

mod packages;
mod subscriptions;
mod summary;


pub use packages::{CatalogEntry, InstalledPackage, PackageInfo};
pub use summary::RepoSummary;

use crate::config::Settings;
use crate::core::Result;
use crate::index::IndexBuilder;
use crate::repo::RepoResolver;
use crate::store::ConfigStore;
use std::path::{Path, PathBuf};

/// Entry point for repository and package queries.
#[derive(Debug, Clone)]
pub struct RepoCatalog {
    store: ConfigStore,
    resolver: RepoResolver,
    index: IndexBuilder,
    trusted_repos_file: PathBuf,
}

impl RepoCatalog {
    pub fn new(
        store: ConfigStore,
        resolver: RepoResolver,
        index: IndexBuilder,
        trusted_repos_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            resolver,
            index,
            trusted_repos_file: trusted_repos_file.into(),
        }
    }

    /// Build a catalog from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            ConfigStore::new(settings.config_file_path()?),
            settings.resolver()?,
            settings.index_builder(),
            settings.trusted_repos_path(),
        ))
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn resolver(&self) -> &RepoResolver {
        &self.resolver
    }

    pub fn index_builder(&self) -> &IndexBuilder {
        &self.index
    }

    pub fn trusted_repos_file(&self) -> &Path {
        &self.trusted_repos_file
    }

    /// Resolve `identifier`, mapping the empty identifier to the stable
    /// repository.
    pub fn repo_path(&self, identifier: &str) -> PathBuf {
        self.resolver.resolve(identifier)
    }

    /// Index file location of the repository named by `identifier`.
    pub fn index_path(&self, identifier: &str) -> PathBuf {
        self.index.index_path(&self.repo_path(identifier))
    }
}
