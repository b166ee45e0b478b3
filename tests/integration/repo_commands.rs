use predicates::prelude::*;
use repoman_cli::test_utils::TestEnvironment;
use std::fs;

use crate::common::repoman;

#[test]
fn test_repo_list_contains_only_stable_by_default() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .args(["repo", "list"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.stable_id()));
}

#[test]
fn test_repo_add_then_list() {
    let env = TestEnvironment::new().unwrap();
    env.user_repo("alice").unwrap();

    repoman(&env)
        .args(["repo", "add", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribed to 'alice'"));

    repoman(&env)
        .args(["repo", "list"])
        .assert()
        .success()
        .stdout(format!("{}\nalice\n", env.stable_id()));

    assert_eq!(env.read_config().unwrap(), "repo = alice\n");
}

#[test]
fn test_repo_remove_keeps_comments_and_other_lines() {
    let env = TestEnvironment::new().unwrap();
    env.write_config("# mine\nrepo = alice # laptop\nvim\nrepo = alice # desktop\n").unwrap();

    repoman(&env).args(["repo", "remove", "alice"]).assert().success();

    assert_eq!(env.read_config().unwrap(), "# mine\n# laptop\nvim\nrepo = alice # desktop\n");

    // The second entry still subscribes.
    repoman(&env)
        .args(["repo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn test_repo_paths_and_path() {
    let env = TestEnvironment::new().unwrap();
    env.write_config("repo = alice\n").unwrap();
    let alice_path = env.user_repo_path("alice");

    repoman(&env).args(["repo", "paths"]).assert().success().stdout(format!(
        "{stable} -> {stable}\nalice -> {alice}\n",
        stable = env.stable_id(),
        alice = alice_path.display()
    ));

    repoman(&env)
        .args(["repo", "path", "alice"])
        .assert()
        .success()
        .stdout(format!("{}\n", alice_path.display()));

    repoman(&env)
        .args(["repo", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.stable_id()));

    repoman(&env)
        .args(["repo", "path", "/srv/pkgs/"])
        .assert()
        .success()
        .stdout("/srv/pkgs\n");
}

#[test]
fn test_repo_index_writes_sorted_index() {
    let env = TestEnvironment::new().unwrap();
    let stable = env.stable_repo().unwrap();
    stable.add_package("net/curl", Some("Transfer data with URLs\n")).unwrap();
    stable.add_package("editors/vim", Some("Vi IMproved\n")).unwrap();
    stable.add_package("editors/vim/plugins", None).unwrap();

    repoman(&env)
        .args(["repo", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 3 packages"));

    let index = fs::read_to_string(env.stable_dir.join(".repoman-index")).unwrap();
    assert_eq!(
        index,
        "source editors/vim Vi IMproved\nsource editors/vim/plugins\nsource net/curl Transfer data with URLs\n"
    );
}

#[test]
fn test_repo_show_text_and_json() {
    let env = TestEnvironment::new().unwrap();
    let alice = env.user_repo("alice").unwrap();
    alice.add_package("curl", None).unwrap();
    alice.add_package("wget", None).unwrap();
    alice.reindex().unwrap();
    env.trust(&[alice.path()]).unwrap();
    env.write_config("repo = alice\nalice:curl\n").unwrap();

    repoman(&env)
        .args(["repo", "show", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 available, 1 installed"))
        .stdout(predicate::str::contains("Trusted:    yes"));

    let output = repoman(&env)
        .args(["repo", "show", "alice", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["identifier"], "alice");
    assert_eq!(summary["available_count"], 2);
    assert_eq!(summary["installed_count"], 1);
    assert_eq!(summary["is_trusted"], true);
    assert_eq!(summary["is_subscribed"], true);
    assert!(summary["last_indexed_at"].is_string());
}

#[test]
fn test_repo_show_unsubscribed_repository() {
    let env = TestEnvironment::new().unwrap();
    let bob = env.user_repo("bob").unwrap();
    bob.write_index(&["source zsh Z shell"]).unwrap();

    repoman(&env)
        .args(["repo", "show", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribed: no"));
}
