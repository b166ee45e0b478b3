//! Test environment setup
//!
//! Lays out everything repoman reads inside one temporary directory:
//!
//! ```text
//! <temp>/
//!   stable/              stable repository
//!   users/<name>/repoman unstable repositories (template)
//!   home/.repoman/config user config
//!   settings.toml
//!   trusted-repos
//! ```

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::RepoFixture;
use crate::catalog::RepoCatalog;
use crate::config::Settings;
use crate::constants::{CONFIG_ENV_VAR, NO_PROGRESS_ENV_VAR, SETTINGS_ENV_VAR};

/// A self-contained repoman installation for tests.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub stable_dir: PathBuf,
    pub users_dir: PathBuf,
    pub home_dir: PathBuf,
    pub config_path: PathBuf,
    pub settings_path: PathBuf,
    pub trusted_path: PathBuf,
}

impl TestEnvironment {
    /// Create the directory layout and write `settings.toml`. The stable
    /// repository exists but has no packages or index yet.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let stable_dir = root.join("stable");
        let users_dir = root.join("users");
        let home_dir = root.join("home");
        let config_path = home_dir.join(".repoman").join("config");
        let settings_path = root.join("settings.toml");
        let trusted_path = root.join("trusted-repos");

        fs::create_dir_all(&stable_dir)?;
        fs::create_dir_all(&users_dir)?;
        fs::create_dir_all(&home_dir)?;

        let env = Self {
            temp_dir,
            stable_dir,
            users_dir,
            home_dir,
            config_path,
            settings_path,
            trusted_path,
        };
        env.write_settings()?;
        Ok(env)
    }

    fn write_settings(&self) -> Result<()> {
        let settings = self.settings();
        let text = toml::to_string_pretty(&settings).context("serializing test settings")?;
        fs::write(&self.settings_path, text)
            .with_context(|| format!("writing {}", self.settings_path.display()))
    }

    /// Settings pointing at this environment.
    pub fn settings(&self) -> Settings {
        Settings {
            stable_repo: self.stable_dir.display().to_string(),
            unstable_template: format!("{}/{{name}}/repoman", self.users_dir.display()),
            config_file: Some(self.config_path.display().to_string()),
            trusted_repos_file: self.trusted_path.display().to_string(),
            ..Settings::default()
        }
    }

    /// A catalog over this environment.
    pub fn catalog(&self) -> Result<RepoCatalog> {
        Ok(RepoCatalog::from_settings(&self.settings())?)
    }

    /// Identifier of the stable repository.
    pub fn stable_id(&self) -> String {
        self.stable_dir.display().to_string()
    }

    /// The stable repository as a fixture.
    pub fn stable_repo(&self) -> Result<RepoFixture> {
        RepoFixture::at(&self.stable_dir)
    }

    /// Create the unstable repository for `name` (its directory only).
    pub fn user_repo(&self, name: &str) -> Result<RepoFixture> {
        RepoFixture::at(self.user_repo_path(name))
    }

    /// Where the template puts the unstable repository `name`.
    pub fn user_repo_path(&self, name: &str) -> PathBuf {
        self.users_dir.join(name).join("repoman")
    }

    /// Replace the user config file.
    pub fn write_config(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, content)
            .with_context(|| format!("writing {}", self.config_path.display()))
    }

    /// Current user config text, empty if it does not exist.
    pub fn read_config(&self) -> Result<String> {
        match fs::read_to_string(&self.config_path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the trusted-repos list, one path per line.
    pub fn trust(&self, paths: &[&Path]) -> Result<()> {
        let content: String =
            paths.iter().map(|p| format!("{}\n", p.display())).collect();
        fs::write(&self.trusted_path, content)?;
        Ok(())
    }

    /// Environment variables that point the `repoman` binary at this
    /// environment.
    pub fn env_vars(&self) -> Vec<(&'static str, OsString)> {
        vec![
            (SETTINGS_ENV_VAR, self.settings_path.clone().into_os_string()),
            (CONFIG_ENV_VAR, self.config_path.clone().into_os_string()),
            (NO_PROGRESS_ENV_VAR, OsString::from("1")),
            ("HOME", self.home_dir.clone().into_os_string()),
            ("NO_COLOR", OsString::from("1")),
        ]
    }
}
