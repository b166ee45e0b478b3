//! Command-line interface for repoman.
//!
//! Each command lives in its own module with its own argument struct and an
//! `execute` method taking the shared [`CommandContext`]. The commands are a
//! thin layer over [`RepoCatalog`](crate::catalog::RepoCatalog): they parse
//! arguments, call one catalog operation and format the result.
//!
//! # Available Commands
//!
//! ## Repositories
//! - `repo add <name>` / `repo remove <name>` - manage subscriptions
//! - `repo list` / `repo paths` - subscribed repositories (with paths)
//! - `repo path [name]` - where an identifier resolves to
//! - `repo show [name]` - repository summary
//! - `repo index [name]` - rebuild a repository's package index
//!
//! ## Packages
//! - `list` - installed packages
//! - `avail [--repo <name>]` - packages available from subscriptions
//! - `show <package>` - details of one package
//!
//! # Global Options
//!
//! | Option | Effect |
//! |--------|--------|
//! | `-v, --verbose` | debug logging |
//! | `-q, --quiet` | errors only |
//! | `--config <path>` | user config file (`REPOMAN_CONFIG`) |
//! | `--settings <path>` | settings file (`REPOMAN_SETTINGS`) |
//! | `--no-progress` | hide spinners (`REPOMAN_NO_PROGRESS`) |
//! | `--no-color` | plain output (`NO_COLOR`) |
//!
//! # Exit Codes
//!
//! Failures exit with the code of their error kind, see
//! [`exit_codes`](crate::core::exit_codes). Usage errors exit with 2.

mod avail;
mod common;
mod installed;
mod repo;
mod show;


pub use common::{CommandContext, OutputFormat};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{CONFIG_ENV_VAR, NO_PROGRESS_ENV_VAR, SETTINGS_ENV_VAR};

/// Runtime options derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedders can run commands with
/// an explicit configuration instead of parsed arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Hide progress spinners.
    pub no_progress: bool,

    /// Disable colored output.
    pub no_color: bool,

    /// User config file override.
    pub config_path: Option<PathBuf>,

    /// Settings file override.
    pub settings_path: Option<PathBuf>,
}

/// Subscription and package discovery manager.
#[derive(Parser, Debug)]
#[command(name = "repoman", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the user config file
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the settings file
    #[arg(long, global = true, env = SETTINGS_ENV_VAR, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Disable progress spinners
    #[arg(long, global = true, env = NO_PROGRESS_ENV_VAR)]
    no_progress: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage repository subscriptions
    Repo(repo::RepoCommand),

    /// List installed packages
    List(installed::ListCommand),

    /// List packages available from subscribed repositories
    Avail(avail::AvailCommand),

    /// Show details of a package
    Show(show::ShowCommand),
}

impl Cli {
    /// Run the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` selects `error`, otherwise
    /// `warn`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            no_progress: self.no_progress,
            no_color: self.no_color,
            config_path: self.config.clone(),
            settings_path: self.settings.clone(),
        }
    }

    /// Run the command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        if config.no_color {
            colored::control::set_override(false);
        }

        let ctx = CommandContext::load(config.settings_path, config.config_path, config.no_progress)?;

        match self.command {
            Commands::Repo(cmd) => cmd.execute(&ctx),
            Commands::List(cmd) => cmd.execute(&ctx),
            Commands::Avail(cmd) => cmd.execute(&ctx),
            Commands::Show(cmd) => cmd.execute(&ctx),
        }
    }
}
