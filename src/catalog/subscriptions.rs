//! Subscription management.

use crate::catalog::RepoCatalog;
use crate::core::{RepomanError, Result};
use crate::repo::PackageRef;
use crate::store::ConfigOption;
use crate::utils::fs::is_existing_dir;
use std::collections::BTreeSet;
use tracing::{debug, info};

impl RepoCatalog {
    /// The stable repository plus every `repo` entry, sorted and
    /// deduplicated by raw identifier.
    pub fn subscribed_repos(&self) -> Result<BTreeSet<String>> {
        let mut repos: BTreeSet<String> =
            self.store.list_entries(ConfigOption::Repo)?.into_iter().collect();
        repos.insert(self.resolver.stable_identifier().to_string());
        Ok(repos)
    }

    pub fn is_subscribed(&self, identifier: &str) -> Result<bool> {
        Ok(self.subscribed_repos()?.contains(identifier))
    }

    /// Subscribe to a repository.
    ///
    /// # Errors
    ///
    /// - [`RepomanError::AlreadySubscribed`] if `identifier` is already in the
    ///   subscribed set (the stable repository always is)
    /// - [`RepomanError::RepoNotFound`] if it does not resolve to an existing
    ///   directory
    pub fn add_subscription(&self, identifier: &str) -> Result<()> {
        if self.is_subscribed(identifier)? {
            return Err(RepomanError::AlreadySubscribed {
                identifier: identifier.to_string(),
            });
        }

        let path = self.resolver.resolve(identifier);
        if !is_existing_dir(&path) {
            return Err(RepomanError::RepoNotFound {
                identifier: identifier.to_string(),
                path: path.display().to_string(),
            });
        }

        self.store.add_entry(ConfigOption::Repo, identifier)?;
        info!("Subscribed to {identifier} ({})", path.display());
        Ok(())
    }

    /// Unsubscribe from a repository.
    ///
    /// # Errors
    ///
    /// - [`RepomanError::StableRepository`] for the stable repository
    /// - [`RepomanError::NotSubscribed`] if `identifier` is not subscribed
    pub fn remove_subscription(&self, identifier: &str) -> Result<()> {
        if self.resolver.is_stable(identifier) {
            return Err(RepomanError::StableRepository {
                identifier: identifier.to_string(),
            });
        }

        if !self.is_subscribed(identifier)? {
            return Err(RepomanError::NotSubscribed {
                identifier: identifier.to_string(),
            });
        }

        self.store.remove_entry(ConfigOption::Repo, identifier)?;
        info!("Unsubscribed from {identifier}");
        Ok(())
    }

    /// Number of installed-package markers belonging to the repository named
    /// by `identifier`, compared by resolved repository path.
    pub fn installed_package_count(&self, identifier: &str) -> Result<usize> {
        let repo_path = self.resolver.resolve(identifier);
        let count = self
            .store
            .list_bare_keys()?
            .iter()
            .filter(|key| PackageRef::parse(key).repo_path(&self.resolver) == repo_path)
            .count();
        debug!("{count} installed packages from {}", repo_path.display());
        Ok(count)
    }
}
