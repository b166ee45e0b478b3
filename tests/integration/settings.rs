use predicates::prelude::*;
use repoman_cli::test_utils::TestEnvironment;
use std::fs;

use crate::common::repoman;

#[test]
fn test_config_flag_overrides_environment() {
    let env = TestEnvironment::new().unwrap();
    env.user_repo("alice").unwrap();
    let other = env.temp_dir.path().join("other-config");

    repoman(&env).arg("--config").arg(&other).args(["repo", "add", "alice"]).assert().success();

    assert_eq!(fs::read_to_string(&other).unwrap(), "repo = alice\n");
    assert_eq!(env.read_config().unwrap(), "");
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .env("REPOMAN_SETTINGS", env.temp_dir.path().join("absent.toml"))
        .args(["repo", "path"])
        .assert()
        .success()
        .stdout("/opt/repoman/stable\n");

    repoman(&env)
        .env("REPOMAN_SETTINGS", env.temp_dir.path().join("absent.toml"))
        .args(["repo", "path", "bob"])
        .assert()
        .success()
        .stdout("/home/bob/repoman\n");
}

#[test]
fn test_custom_file_names() {
    let env = TestEnvironment::new().unwrap();
    let settings = format!(
        "stable_repo = \"{}\"\nunstable_template = \"{}/{{name}}\"\nconfig_file = \"{}\"\n\
         index_file = \"INDEX\"\nmarker_file = \"setup.sh\"\nreadme_file = \"ABOUT\"\n",
        env.stable_dir.display(),
        env.users_dir.display(),
        env.config_path.display(),
    );
    fs::write(&env.settings_path, settings).unwrap();

    let pkg = env.stable_dir.join("tool");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("setup.sh"), "").unwrap();
    fs::write(pkg.join("ABOUT"), "Custom tool\n").unwrap();

    repoman(&env).args(["repo", "index"]).assert().success();

    assert_eq!(
        fs::read_to_string(env.stable_dir.join("INDEX")).unwrap(),
        "source tool Custom tool\n"
    );
    assert!(!env.stable_dir.join(".repoman-index").exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnvironment::new().unwrap();

    repoman(&env)
        .args(["--verbose", "repo", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
