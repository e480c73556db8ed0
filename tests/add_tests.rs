//! Integration tests for the add command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::jotter_cmd;

#[test]
fn test_add_creates_journal_file() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("journal.json");

    jotter_cmd()
        .arg("--file")
        .arg(&journal)
        .arg("add")
        .arg("--title")
        .arg("Trip")
        .arg("--content")
        .arg("Went hiking")
        .arg("--tags")
        .arg("outdoors,fun")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry: 'Trip' successfully"));

    assert!(journal.exists());

    let contents = fs::read_to_string(&journal).unwrap();
    assert!(contents.contains("\"title\": \"Trip\""));
    assert!(contents.contains("\"content\": \"Went hiking\""));
    assert!(contents.contains("outdoors"));
}

#[test]
fn test_add_appends_to_existing_journal() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("journal.json");

    for (title, content) in [("First", "one"), ("Second", "two")] {
        jotter_cmd()
            .arg("--file")
            .arg(&journal)
            .arg("add")
            .arg("--title")
            .arg(title)
            .arg("--content")
            .arg(content)
            .arg("--tags")
            .arg("")
            .assert()
            .success();
    }

    jotter_cmd()
        .arg("--file")
        .arg(&journal)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 2"));
}

#[test]
fn test_add_prompts_for_missing_values() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("journal.json");

    jotter_cmd()
        .arg("--file")
        .arg(&journal)
        .arg("add")
        .write_stdin("Trip\nWent hiking\noutdoors, fun\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry: 'Trip' successfully"));

    jotter_cmd()
        .arg("--file")
        .arg(&journal)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: outdoors, fun"));
}

#[test]
fn test_add_respects_journal_env_var() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("from-env.json");

    jotter_cmd()
        .env("JOTTER_JOURNAL", &journal)
        .arg("add")
        .arg("--title")
        .arg("Env")
        .arg("--content")
        .arg("entry")
        .arg("--tags")
        .arg("")
        .assert()
        .success();

    assert!(journal.exists());
}

#[test]
fn test_added_entry_has_date_and_id() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().join("journal.json");

    jotter_cmd()
        .arg("--file")
        .arg(&journal)
        .arg("add")
        .arg("--title")
        .arg("Trip")
        .arg("--content")
        .arg("Went hiking")
        .arg("--tags")
        .arg("")
        .assert()
        .success();

    let contents = fs::read_to_string(&journal).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let entry = &entries[0];

    assert!(!entry["date"].as_str().unwrap().is_empty());
    assert!(!entry["id"].as_str().unwrap().is_empty());
    assert_eq!(entry["tags"].as_array().unwrap().len(), 0);
}
