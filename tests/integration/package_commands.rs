use predicates::prelude::*;
use repoman_cli::test_utils::TestEnvironment;

use crate::common::repoman;

fn populated_env() -> TestEnvironment {
    let env = TestEnvironment::new().unwrap();

    let stable = env.stable_repo().unwrap();
    stable.add_package("vim", Some("Vi IMproved\n")).unwrap();
    stable.reindex().unwrap();

    let alice = env.user_repo("alice").unwrap();
    alice.add_package("curl", Some("Transfer data\n")).unwrap();
    alice.add_package("wget", None).unwrap();
    alice.reindex().unwrap();

    env.write_config("repo = alice\nvim\nalice:curl # pinned\nalice:gone\n").unwrap();
    env
}

#[test]
fn test_list_without_packages() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env).arg("list").assert().success().stdout("No packages installed.\n");
}

#[test]
fn test_list_installed_packages() {
    let env = populated_env();

    repoman(&env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice:curl\n"))
        .stdout(predicate::str::contains("alice:gone (missing)"))
        .stdout(predicate::str::contains("vim\n"));
}

#[test]
fn test_list_json() {
    let env = populated_env();

    let output = repoman(&env).args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let installed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens: Vec<_> = installed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["token"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tokens, vec!["alice:curl", "alice:gone", "vim"]);
}

#[test]
fn test_avail_merges_subscriptions() {
    let env = populated_env();

    repoman(&env)
        .arg("avail")
        .assert()
        .success()
        .stdout(predicate::str::contains("vim"))
        .stdout(predicate::str::contains("Vi IMproved"))
        .stdout(predicate::str::contains("alice:curl"))
        .stdout(predicate::str::contains("Transfer data"))
        .stdout(predicate::str::contains("alice:wget"));
}

#[test]
fn test_avail_single_repo_json() {
    let env = populated_env();

    let output =
        repoman(&env).args(["avail", "--repo", "alice", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["token"], "alice:curl");
    assert_eq!(entries[0]["repository"], "alice");
    assert_eq!(entries[0]["record"]["kind"], "source");
    assert_eq!(entries[0]["record"]["synopsis"], "Transfer data");
}

#[test]
fn test_avail_skips_repositories_without_index() {
    let env = populated_env();
    env.user_repo("bob").unwrap();
    env.write_config("repo = alice\nrepo = bob\n").unwrap();

    repoman(&env)
        .arg("avail")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice:curl"))
        .stderr(predicate::str::contains("Skipping repository"));
}

#[test]
fn test_show_package() {
    let env = populated_env();

    repoman(&env)
        .args(["show", "alice:curl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer data"))
        .stdout(predicate::str::contains("Installed:  yes"));

    repoman(&env)
        .args(["show", "alice:wget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed:  no"));

    let output = repoman(&env).args(["show", "vim", "--format", "json"]).output().unwrap();
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["reference"]["repo"], "");
    assert_eq!(info["reference"]["name"], "vim");
    assert_eq!(info["synopsis"], "Vi IMproved");
}
