//! Shared pieces of the command implementations.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::catalog::RepoCatalog;
use crate::config::Settings;

/// Output format for listing and show commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Everything a command needs: loaded settings, the catalog built from them
/// and the output options.
#[derive(Debug)]
pub struct CommandContext {
    pub settings: Settings,
    pub catalog: RepoCatalog,
    pub no_progress: bool,
}

impl CommandContext {
    /// Load settings and build the catalog.
    ///
    /// `config_path` overrides the `config_file` setting.
    pub fn load(
        settings_path: Option<PathBuf>,
        config_path: Option<PathBuf>,
        no_progress: bool,
    ) -> Result<Self> {
        let mut settings = Settings::load_with_optional(settings_path)?;
        if let Some(path) = config_path {
            settings = settings.with_config_file(path.display().to_string());
        }
        debug!("Using user config {}", settings.config_file_path()?.display());

        let catalog = RepoCatalog::from_settings(&settings)?;
        Ok(Self {
            settings,
            catalog,
            no_progress,
        })
    }

    /// Identifier for an optional repository argument; the stable repository
    /// when omitted.
    pub fn repo_or_stable(&self, name: Option<String>) -> String {
        name.unwrap_or_else(|| self.catalog.resolver().stable_identifier().to_string())
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}
