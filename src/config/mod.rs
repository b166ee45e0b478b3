//! Configuration management for repoman
//!
//! repoman reads two kinds of configuration:
//!
//! 1. **Settings** (`~/.repoman/settings.toml`) - locations of the stable
//!    repository, the unstable-repository template, the user config file, the
//!    trusted-repos list and the file names that make up a repository. TOML,
//!    loaded once per invocation into [`Settings`].
//! 2. **User config** (`~/.repoman/config`) - the line-oriented `key = value`
//!    file holding subscriptions and installed-package markers. That file is
//!    owned by [`crate::store`], not by this module.
//!
//! # Overrides
//!
//! | What | Flag | Environment |
//! |------|------|-------------|
//! | settings file | `--settings` | `REPOMAN_SETTINGS` |
//! | user config file | `--config` | `REPOMAN_CONFIG` |
//!
//! A flag wins over its environment variable, which wins over the
//! `config_file` setting, which wins over the default location.
//!
//! # Modules
//!
//! - `parser` - typed TOML loading with file context
//! - `settings` - the [`Settings`] struct, defaults, expansion and validation

pub mod parser;
pub mod settings;

pub use parser::parse_config;
pub use settings::Settings;
