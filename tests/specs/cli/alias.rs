// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `beepctl alias`: the alias table lives in config.json and the
//! commands never need the desktop app.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn config_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("beepctl")
}

fn beepctl(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("beepctl");
    cmd.env("BEEPCTL_CONFIG_DIR", config_dir(temp))
        .env("NO_COLOR", "1")
        .env_remove("BEEPER_TOKEN")
        .env_remove("BEEPER_URL")
        .env_remove("BEEPCTL_LOG");
    cmd
}

fn saved_config(temp: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(config_dir(temp).join("config.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn empty_table_lists_hint() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .arg("alias")
        .assert()
        .success()
        .stdout(predicate::str::contains("No aliases saved"))
        .stdout(predicate::str::contains("beepctl alias add"));
}

#[test]
fn add_then_show_and_list() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["alias", "add", "work", "!abc123:beeper.local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias 'work' -> !abc123:beeper.local"));

    beepctl(&temp)
        .args(["alias", "show", "work"])
        .assert()
        .success()
        .stdout("!abc123:beeper.local\n");

    beepctl(&temp)
        .args(["alias", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aliases (1)"))
        .stdout(predicate::str::contains("work"));

    similar_asserts::assert_eq!(
        saved_config(&temp),
        serde_json::json!({"aliases": {"work": "!abc123:beeper.local"}})
    );
}

#[test]
fn overwrite_warns() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["alias", "add", "work", "!old"])
        .assert()
        .success();
    beepctl(&temp)
        .args(["alias", "add", "work", "!new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced 'work' (was !old)"));
}

#[parameterized(
    space = { "my alias", "!abc", "invalid alias name" },
    punctuation = { "a.b", "!abc", "invalid alias name" },
    missing_bang = { "work", "abc:beeper.local", "invalid chat ID" },
)]
fn add_rejects_invalid_input(name: &str, chat_id: &str, message: &str) {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["alias", "add", name, chat_id])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(format!("error: {message}")));
    assert!(!config_dir(&temp).join("config.json").exists());
}

#[test]
fn remove_deletes_and_missing_fails() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["alias", "add", "work", "!w"])
        .assert()
        .success();
    beepctl(&temp)
        .args(["alias", "rm", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed alias 'work'"));
    beepctl(&temp)
        .args(["alias", "remove", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alias not found: 'work'"));
}

#[test]
fn aliases_resolve_in_other_commands() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["alias", "add", "work", "!w:beeper.local"])
        .assert()
        .success();
    beepctl(&temp)
        .args(["send", "work", "hello", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("!w:beeper.local"));
}

#[test]
fn legacy_config_is_migrated() {
    let temp = TempDir::new().unwrap();
    let legacy = temp.path().join("beepcli");
    fs::create_dir_all(&legacy).unwrap();
    fs::write(
        legacy.join("config.json"),
        r#"{"aliases": {"old": "!legacy:beeper.local"}}"#,
    )
    .unwrap();

    beepctl(&temp)
        .args(["alias", "show", "old"])
        .assert()
        .success()
        .stdout("!legacy:beeper.local\n")
        .stderr(predicate::str::contains("Migrated config from"));

    assert!(!legacy.exists());
    assert!(config_dir(&temp).join("config.json").exists());
}
