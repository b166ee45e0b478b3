//! Settings for repoman.
//!
//! Settings hold every location the core components need: the stable
//! repository, the template for user-scoped unstable repositories, the user
//! config file, the trusted-repos list and the file names that make up a
//! repository. They are read from `~/.repoman/settings.toml` (or the file named
//! by `REPOMAN_SETTINGS` / `--settings`) and passed explicitly to each
//! component; nothing reads them from global state.
//!
//! # File Format
//!
//! Every field is optional; missing fields keep their defaults.
//!
//! ```toml
//! stable_repo = "/opt/repoman/stable"
//! unstable_template = "/home/{name}/repoman"
//! config_file = "~/.repoman/config"
//! trusted_repos_file = "/opt/repoman/trusted-repos"
//! index_file = ".repoman-index"
//! marker_file = "env.sh"
//! readme_file = "README"
//! ```
//!
//! Path-valued fields support `~/` and `$VAR` expansion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repoman_cli::config::Settings;
//!
//! # fn example() -> repoman_cli::core::Result<()> {
//! let settings = Settings::load_with_optional(None)?;
//! let resolver = settings.resolver()?;
//! println!("alice -> {}", resolver.resolve("alice").display());
//! # Ok(())
//! # }
//! ```

use crate::config::parser::parse_config;
use crate::constants::{
    DEFAULT_INDEX_FILE, DEFAULT_MARKER_FILE, DEFAULT_README_FILE, DEFAULT_STABLE_REPO,
    DEFAULT_TRUSTED_REPOS_FILE, DEFAULT_UNSTABLE_TEMPLATE, SETTINGS_FILE, USER_CONFIG_FILE,
    USER_DIR,
};
use crate::core::{RepomanError, Result};
use crate::index::IndexBuilder;
use crate::repo::{RepoResolver, RepoTemplate};
use crate::utils::platform::{get_home_dir, resolve_path};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations and file names used by all repoman components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Identifier (absolute path) of the always-subscribed stable repository.
    pub stable_repo: String,

    /// Path pattern for unstable repositories; `{name}` is replaced by the
    /// repository name.
    pub unstable_template: String,

    /// User config file holding subscriptions and installed-package markers.
    ///
    /// `None` means `~/.repoman/config`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,

    /// List of trusted repository paths, one per line.
    pub trusted_repos_file: String,

    /// Name of the index file at the root of each repository.
    pub index_file: String,

    /// File whose presence marks a directory as a package.
    pub marker_file: String,

    /// Package readme; its first line is the package synopsis.
    pub readme_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stable_repo: DEFAULT_STABLE_REPO.to_string(),
            unstable_template: DEFAULT_UNSTABLE_TEMPLATE.to_string(),
            config_file: None,
            trusted_repos_file: DEFAULT_TRUSTED_REPOS_FILE.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            readme_file: DEFAULT_README_FILE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an optional path, falling back to the default
    /// location. A missing file yields the defaults.
    ///
    /// The result is expanded and validated.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        let settings = if path.exists() {
            debug!("Loading settings from {}", path.display());
            Self::load_from(&path)?
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Self::default()
        };

        settings.expanded()
    }

    /// Load settings from a specific file without expanding them.
    pub fn load_from(path: &Path) -> Result<Self> {
        parse_config(path)
    }

    /// `~/.repoman/settings.toml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_home_dir()?.join(USER_DIR).join(SETTINGS_FILE))
    }

    /// `~/.repoman/config`
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(get_home_dir()?.join(USER_DIR).join(USER_CONFIG_FILE))
    }

    /// Override the user config file location.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Expand `~/` and `$VAR` in path-valued fields, then validate.
    pub fn expanded(mut self) -> Result<Self> {
        self.stable_repo = resolve_path(&self.stable_repo)?;
        self.unstable_template = resolve_path(&self.unstable_template)?;
        self.trusted_repos_file = resolve_path(&self.trusted_repos_file)?;
        if let Some(config_file) = &self.config_file {
            self.config_file = Some(resolve_path(config_file)?);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the settings for consistency.
    pub fn validate(&self) -> Result<()> {
        if !self.stable_repo.starts_with('/') {
            return Err(RepomanError::ConfigError {
                message: format!(
                    "stable_repo must be an absolute path, got '{}'",
                    self.stable_repo
                ),
            });
        }

        RepoTemplate::parse(&self.unstable_template)?;

        for (field, value) in [
            ("index_file", &self.index_file),
            ("marker_file", &self.marker_file),
            ("readme_file", &self.readme_file),
        ] {
            if value.is_empty() || value.contains('/') || value.chars().any(char::is_whitespace) {
                return Err(RepomanError::ConfigError {
                    message: format!(
                        "{field} must be a plain file name without '/' or whitespace, got '{value}'"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Path of the user config file.
    pub fn config_file_path(&self) -> Result<PathBuf> {
        match &self.config_file {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_config_file(),
        }
    }

    /// Path of the trusted-repos list.
    pub fn trusted_repos_path(&self) -> PathBuf {
        PathBuf::from(&self.trusted_repos_file)
    }

    /// Build the repository resolver described by these settings.
    pub fn resolver(&self) -> Result<RepoResolver> {
        let template = RepoTemplate::parse(&self.unstable_template)?;
        Ok(RepoResolver::new(self.stable_repo.clone(), template))
    }

    /// Build an index builder using the configured file names.
    pub fn index_builder(&self) -> IndexBuilder {
        IndexBuilder::new(&self.marker_file, &self.readme_file, &self.index_file)
    }
}
