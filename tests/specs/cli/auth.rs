// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `beepctl auth`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn beepctl(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("beepctl");
    cmd.env("BEEPCTL_CONFIG_DIR", temp.path().join("beepctl"))
        .env("NO_COLOR", "1")
        .env_remove("BEEPER_TOKEN")
        .env_remove("BEEPER_URL")
        .env_remove("BEEPCTL_LOG");
    cmd
}

const TOKEN: &str = "bt_0123456789abcdefWXYZ";

#[test]
fn show_without_token() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token:   not set"))
        .stdout(predicate::str::contains("http://localhost:23373 (default)"))
        .stdout(predicate::str::contains("beepctl auth set <token>"));
}

#[test]
fn set_then_show_masks_token() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["auth", "set", TOKEN])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token saved"));

    beepctl(&temp)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bt_01234...WXYZ (config file)"))
        .stdout(predicate::str::contains(TOKEN).not());

    let saved = fs::read_to_string(temp.path().join("beepctl/config.json")).unwrap();
    assert!(saved.contains(&format!("\"token\": \"{TOKEN}\"")));
}

#[test]
fn environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["auth", "set", TOKEN])
        .assert()
        .success();

    beepctl(&temp)
        .env("BEEPER_TOKEN", "env-token-0000000000ABCD")
        .env("BEEPER_URL", "http://127.0.0.1:9999")
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env-toke...ABCD (environment (BEEPER_TOKEN))"))
        .stdout(predicate::str::contains(
            "http://127.0.0.1:9999 (environment (BEEPER_URL))",
        ));
}

#[test]
fn clear_removes_token_and_aliases() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["auth", "set", TOKEN])
        .assert()
        .success();
    beepctl(&temp)
        .args(["alias", "add", "work", "!w"])
        .assert()
        .success();

    beepctl(&temp)
        .args(["auth", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration cleared"));

    beepctl(&temp)
        .args(["auth", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
    beepctl(&temp)
        .arg("alias")
        .assert()
        .success()
        .stdout(predicate::str::contains("No aliases saved"));
}

#[test]
fn blank_token_is_rejected() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["auth", "set", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}
