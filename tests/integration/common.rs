//! Helpers shared by the integration tests.

use assert_cmd::Command;
use repoman_cli::test_utils::TestEnvironment;

/// A `repoman` command wired to `env` with progress and color disabled.
pub fn repoman(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("repoman").unwrap();
    cmd.envs(env.env_vars()).env_remove("RUST_LOG");
    cmd
}
