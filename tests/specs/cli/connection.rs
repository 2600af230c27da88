// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for behavior when the desktop app is not reachable.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::TcpListener;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

/// A localhost URL whose port was just released, so connections are refused.
fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn beepctl(temp: &TempDir, url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("beepctl");
    cmd.env("BEEPCTL_CONFIG_DIR", temp.path().join("beepctl"))
        .env("BEEPER_URL", url)
        .env("BEEPER_TOKEN", "test-token")
        .env("NO_COLOR", "1")
        .env_remove("BEEPCTL_LOG");
    cmd
}

#[parameterized(
    accounts = { &["accounts"] },
    chats = { &["chats"] },
    messages = { &["messages", "!c"] },
    search = { &["search", "hello"] },
    send = { &["send", "!c", "hi"] },
    archive = { &["archive", "!c"] },
    focus = { &["focus"] },
)]
fn refused_connection_explains_setup(args: &[&str]) {
    let temp = TempDir::new().unwrap();
    let url = closed_url();
    beepctl(&temp, &url)
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(format!(
            "error: cannot connect to Beeper Desktop API at {url}"
        )))
        .stderr(predicate::str::contains("API enabled"));
}

#[test]
fn unresolved_chat_fails_before_connecting() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp, &closed_url())
        .args(["send", "nowhere", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not resolve chat: 'nowhere'"))
        .stderr(predicate::str::contains("beepctl alias add"));
}

#[test]
fn dry_run_needs_no_server() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp, &closed_url())
        .args(["send", "!c:beeper.local", "hi", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: message NOT sent"));
}

#[test]
fn invalid_base_url_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp, "not a url")
        .arg("accounts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp, &closed_url())
        .args(["--verbose", "accounts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("creating client"))
        .stderr(predicate::str::contains("test-token").not());
}
