use crate::core::RepomanError;
use crate::store::{ConfigOption, ConfigStore};
use crate::test_utils::init_test_logging;
use std::fs;
use tempfile::TempDir;

fn store_with(content: Option<&str>) -> (TempDir, ConfigStore) {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config");
    if let Some(content) = content {
        fs::write(&path, content).unwrap();
    }
    (temp, ConfigStore::new(path))
}

#[test]
fn test_missing_file_reads_as_empty() {
    let (_temp, store) = store_with(None);
    assert!(store.list_entries(ConfigOption::Repo).unwrap().is_empty());
    assert!(store.list_bare_keys().unwrap().is_empty());
}

#[test]
fn test_list_entries_in_file_order() {
    let (_temp, store) = store_with(Some(
        "repo = zed\nvim\n# repo = hidden\nrepo=alice # note\nother = x\nrepo = zed\n",
    ));
    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap(), vec!["zed", "alice", "zed"]);
}

#[test]
fn test_list_bare_keys_deduplicated() {
    let (_temp, store) =
        store_with(Some("vim\nacme:grep # comment\nrepo = alice\nvim\nsetting = 1\n"));
    let keys: Vec<_> = store.list_bare_keys().unwrap().into_iter().collect();
    assert_eq!(keys, vec!["acme:grep", "setting", "vim"]);
}

#[test]
fn test_add_entry_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("nested/.repoman/config"));
    store.add_entry(ConfigOption::Repo, "  alice ").unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "repo = alice\n");
    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap(), vec!["alice"]);
}

#[test]
fn test_add_entry_appends_without_touching_existing_lines() {
    let original = "# my config\nrepo   =   bob    # spaced\n\nvim";
    let (_temp, store) = store_with(Some(original));
    store.add_entry(ConfigOption::Repo, "alice").unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert_eq!(text, format!("{original}\nrepo = alice\n"));
}

#[test]
fn test_add_entry_allows_duplicates() {
    let (_temp, store) = store_with(None);
    store.add_entry(ConfigOption::Repo, "alice").unwrap();
    store.add_entry(ConfigOption::Repo, "alice").unwrap();
    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap().len(), 2);
}

#[test]
fn test_add_entry_rejects_unstorable_values() {
    let (_temp, store) = store_with(None);
    for value in ["", "   ", "bad#value", "two\nlines"] {
        let err = store.add_entry(ConfigOption::Repo, value).unwrap_err();
        assert!(matches!(err, RepomanError::InvalidEntry { .. }), "value {value:?}");
    }
    assert!(!store.path().exists());
}

#[test]
fn test_remove_entry_round_trip_keeps_line_count() {
    let (_temp, store) = store_with(Some("vim\nrepo = bob\n"));
    store.add_entry(ConfigOption::Repo, "alice").unwrap();
    assert!(store.list_entries(ConfigOption::Repo).unwrap().contains(&"alice".to_string()));
    let lines_before = fs::read_to_string(store.path()).unwrap().lines().count();

    store.remove_entry(ConfigOption::Repo, "alice").unwrap();

    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap(), vec!["bob"]);
    let lines_after = fs::read_to_string(store.path()).unwrap().lines().count();
    assert_eq!(lines_before, lines_after);
}

#[test]
fn test_remove_last_entry_of_unterminated_file_keeps_the_line() {
    let (_temp, store) = store_with(Some("repo = bob\nrepo = alice"));

    store.remove_entry(ConfigOption::Repo, "alice").unwrap();

    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(after, "repo = bob\n\n");
    assert_eq!(after.lines().count(), 2);
    assert_eq!(store.load().unwrap().len(), 2);
    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap(), vec!["bob"]);
}

#[test]
fn test_remove_entry_keeps_crlf_line_endings() {
    let (_temp, store) = store_with(Some("repo = alice # c\r\nvim\r\nrepo = bob\r\n"));

    store.remove_entry(ConfigOption::Repo, "alice").unwrap();
    store.remove_entry(ConfigOption::Repo, "bob").unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "# c\r\nvim\r\n\r\n");
    let keys: Vec<_> = store.list_bare_keys().unwrap().into_iter().collect();
    assert_eq!(keys, vec!["vim"]);
}

#[test]
fn test_remove_entry_only_first_occurrence() {
    let (_temp, store) = store_with(Some("repo = alice # home\nrepo = alice # work\n"));
    store.remove_entry(ConfigOption::Repo, "alice").unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert_eq!(text, "# home\nrepo = alice # work\n");
    assert_eq!(store.list_entries(ConfigOption::Repo).unwrap(), vec!["alice"]);
}

#[test]
fn test_remove_entry_not_found() {
    let (_temp, store) = store_with(Some("repo = bob\n# repo = alice\n"));
    let err = store.remove_entry(ConfigOption::Repo, "alice").unwrap_err();
    assert!(matches!(
        err,
        RepomanError::EntryNotFound { ref key, ref value } if key == "repo" && value == "alice"
    ));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "repo = bob\n# repo = alice\n");
}

#[test]
fn test_remove_entry_missing_file_is_not_found() {
    let (_temp, store) = store_with(None);
    assert!(matches!(
        store.remove_entry(ConfigOption::Repo, "alice"),
        Err(RepomanError::EntryNotFound { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_unreadable_config_is_io_error() {
    let (temp, _store) = store_with(None);
    // A directory in place of the file cannot be read as text.
    let dir_path = temp.path().join("config-dir");
    fs::create_dir(&dir_path).unwrap();
    let store = ConfigStore::new(&dir_path);
    assert!(matches!(
        store.list_entries(ConfigOption::Repo),
        Err(RepomanError::FileOperation(_))
    ));
}
