//! Integration test suite for repoman
//!
//! End-to-end tests that drive the `repoman` binary against a temporary
//! installation laid out by [`repoman_cli::test_utils::TestEnvironment`].
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **repo_commands**: subscriptions, paths, summaries and index rebuilds
//! - **package_commands**: `list`, `avail` and `show`
//! - **error_scenarios**: exit codes and error messages
//! - **settings**: settings file, environment and flag overrides

mod common;
mod error_scenarios;
mod package_commands;
mod repo_commands;
mod settings;
