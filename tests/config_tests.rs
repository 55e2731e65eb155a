//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tally_cmd;

#[test]
fn test_config_get_default_file() {
    let temp = TempDir::new().unwrap();

    tally_cmd(temp.path())
        .args(["config", "file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records.txt"));
}

#[test]
fn test_config_set_file_used_by_commands() {
    let temp = TempDir::new().unwrap();

    tally_cmd(temp.path())
        .args(["config", "file", "money.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set file = money.txt"));

    let content = fs::read_to_string(temp.path().join("tally.toml")).unwrap();
    assert!(content.contains("file = \"money.txt\""));

    tally_cmd(temp.path())
        .args(["add", "2025-01-01", "Income", "3", "x"])
        .assert()
        .success();

    assert!(temp.path().join("money.txt").exists());
    assert!(!temp.path().join("records.txt").exists());
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    tally_cmd(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file = records.txt"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    tally_cmd(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = TempDir::new().unwrap();

    tally_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tally config"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tally.toml"), "file = [").unwrap();

    tally_cmd(temp.path())
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tally.toml"));
}
