//! repoman - repository subscription and package discovery
//!
//! repoman lets a user subscribe to package repositories, resolve short
//! repository names to directories, list installed packages and query the
//! package index of each repository.
//!
//! # Architecture Overview
//!
//! Components, leaf first:
//!
//! - [`store`] - the user config file as a structured, comment-preserving
//!   list of `key = value` lines ([`store::ConfigStore`])
//! - [`repo`] - repository identifier resolution ([`repo::RepoResolver`]) and
//!   `[repo:]name` package tokens ([`repo::PackageRef`])
//! - [`index`] - scanning repositories for packages and reading/writing the
//!   per-repository index file ([`index::IndexBuilder`])
//! - [`catalog`] - subscriptions, repository summaries and the merged package
//!   view ([`catalog::RepoCatalog`])
//!
//! Supporting modules:
//!
//! - [`config`] - [`config::Settings`], every location the components need
//! - [`core`] - [`core::RepomanError`], user-facing error context, exit codes
//! - [`utils`] - atomic writes, tolerant reads, path expansion, spinners
//! - [`cli`] - the `repoman` command line
//!
//! Data flows from the config store through the catalog to the resolver and
//! on to the filesystem. Nothing is cached between calls.
//!
//! # Files
//!
//! ```text
//! ~/.repoman/settings.toml   settings (optional)
//! ~/.repoman/config          subscriptions and installed packages
//! <repo>/.repoman-index      package index of a repository
//! <repo>/<pkg>/env.sh        marks <pkg> as a package
//! <repo>/<pkg>/README        first line is the package synopsis
//! /opt/repoman/trusted-repos trusted repository paths
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! repoman repo add alice          # subscribe to /home/alice/repoman
//! repoman repo list               # stable repository plus subscriptions
//! repoman repo index alice        # rebuild alice's index
//! repoman avail                   # every package of every subscription
//! repoman show alice:net/curl     # one package
//! repoman repo remove alice
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use repoman_cli::catalog::RepoCatalog;
//! use repoman_cli::config::Settings;
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::load_with_optional(None)?;
//! let catalog = RepoCatalog::from_settings(&settings)?;
//!
//! for repo in catalog.subscribed_repos()? {
//!     println!("{repo} -> {}", catalog.repo_path(&repo).display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod index;
pub mod repo;
pub mod store;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
