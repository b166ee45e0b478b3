//! Test utilities for repoman
//!
//! Shared helpers for unit and integration tests. Compiled for `cfg(test)` and
//! behind the `test-utils` feature, which the integration test target enables
//! through the crate's self dev-dependency.
//!
//! - [`init_test_logging`] - one-time tracing setup using the test writer
//! - [`RepoFixture`] - builds repository trees with packages and indices
//! - [`TestEnvironment`] - a temp directory laid out with a stable repository,
//!   a user-repository template, settings, user config and trusted list

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::RepoFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, tests run without a subscriber.
///
/// ```rust,no_run
/// use tracing::Level;
///
/// repoman_cli::test_utils::init_test_logging(Some(Level::DEBUG));
/// ```
///
/// ```bash
/// RUST_LOG=repoman_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
