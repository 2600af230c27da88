// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for help, version and completion output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn beepctl() -> Command {
    let mut cmd = cargo_bin_cmd!("beepctl");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_command_groups() {
    beepctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading:"))
        .stdout(predicate::str::contains("Acting:"))
        .stdout(predicate::str::contains("Setup:"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    beepctl()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn h_and_help_match() {
    let short = beepctl().arg("-h").output().unwrap();
    let long = beepctl().arg("--help").output().unwrap();
    assert!(short.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&short.stdout),
        String::from_utf8_lossy(&long.stdout)
    );
}

#[parameterized(
    lower = { "-v" },
    upper = { "-V" },
    long = { "--version" },
)]
fn version_flags(flag: &str) {
    beepctl()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[parameterized(
    accounts = { "accounts" },
    chats = { "chats" },
    messages = { "messages" },
    search = { "search" },
    contacts = { "contacts" },
    send = { "send" },
    archive = { "archive" },
    reminders = { "reminders" },
    download = { "download" },
    focus = { "focus" },
    auth = { "auth" },
    alias = { "alias" },
    completion = { "completion" },
)]
fn every_command_has_help(command: &str) {
    beepctl()
        .args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn examples_are_shown_in_command_help() {
    beepctl()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("beepctl search invoice"));
}

#[test]
fn unknown_command_fails() {
    beepctl()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_scripts(shell: &str) {
    beepctl()
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("beepctl"));
}
