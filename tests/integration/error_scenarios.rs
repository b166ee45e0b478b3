use predicates::prelude::*;
use repoman_cli::test_utils::TestEnvironment;
use std::fs;

use crate::common::repoman;

#[test]
fn test_add_twice_is_already_subscribed() {
    let env = TestEnvironment::new().unwrap();
    env.user_repo("alice").unwrap();

    repoman(&env).args(["repo", "add", "alice"]).assert().success();
    repoman(&env)
        .args(["repo", "add", "alice"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("already subscribed"));
}

#[test]
fn test_add_missing_repository_is_not_found() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .args(["repo", "add", "nobody"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not found"));
    assert_eq!(env.read_config().unwrap(), "");
}

#[test]
fn test_remove_errors() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .args(["repo", "remove", "carol"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("not subscribed"));

    repoman(&env)
        .args(["repo", "remove", &env.stable_id()])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("cannot be unsubscribed"));
}

#[test]
fn test_show_without_index_is_unreadable() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .args(["repo", "show"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("index file does not exist"))
        .stderr(predicate::str::contains("repoman repo index"));
}

#[test]
fn test_corrupt_index_is_unreadable() {
    let env = TestEnvironment::new().unwrap();
    env.stable_repo().unwrap().write_index(&["source vim", "nonsense"]).unwrap();

    repoman(&env).args(["repo", "show"]).assert().failure().code(7);
}

#[test]
fn test_unknown_package_is_not_found() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env).args(["show", "alice:ghost"]).assert().failure().code(4);

    let alice = env.user_repo("alice").unwrap();
    alice.add_package("net/curl", None).unwrap();
    repoman(&env).args(["show", "alice:"]).assert().failure().code(4);
    repoman(&env).args(["show", "alice:net"]).assert().failure().code(4);
}

#[test]
fn test_bad_command_line() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env).arg("frobnicate").assert().failure().code(2);
    repoman(&env).args(["repo", "add"]).assert().failure().code(2);
}

#[test]
fn test_value_with_comment_marker_rejected() {
    let env = TestEnvironment::new().unwrap();
    env.user_repo("a#b").unwrap();

    repoman(&env).args(["repo", "add", "a#b"]).assert().failure().code(9);
    assert_eq!(env.read_config().unwrap(), "");
}

#[test]
fn test_unreadable_config_is_io_failure() {
    let env = TestEnvironment::new().unwrap();
    fs::create_dir_all(&env.config_path).unwrap();

    repoman(&env).args(["repo", "list"]).assert().failure().code(5);
}

#[test]
fn test_invalid_template_in_settings() {
    let env = TestEnvironment::new().unwrap();
    fs::write(&env.settings_path, "unstable_template = \"/home/everyone\"\n").unwrap();

    repoman(&env)
        .args(["repo", "list"])
        .assert()
        .failure()
        .code(9)
        .stderr(predicate::str::contains("{name}"));
}

#[test]
fn test_malformed_settings_file() {
    let env = TestEnvironment::new().unwrap();
    fs::write(&env.settings_path, "stable_repo = [\n").unwrap();

    repoman(&env).args(["repo", "list"]).assert().failure().code(9);
}
