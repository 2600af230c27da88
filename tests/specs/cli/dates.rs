// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for date and time arguments. Bad values are rejected before any
//! request is made, so these run without the desktop app.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

/// Nothing listens here; a request would fail with a connection error.
const CLOSED_URL: &str = "http://127.0.0.1:9";

fn beepctl(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("beepctl");
    cmd.env("BEEPCTL_CONFIG_DIR", temp.path().join("beepctl"))
        .env("BEEPER_URL", CLOSED_URL)
        .env("NO_COLOR", "1")
        .env_remove("BEEPER_TOKEN")
        .env_remove("BEEPCTL_LOG");
    cmd
}

#[parameterized(
    messages_after = { &["messages", "!c", "--after", "last week"], "invalid --after date" },
    messages_before = { &["messages", "!c", "--before", "2d"], "invalid --before date" },
    search_after = { &["search", "invoice", "--after", "soon"], "invalid --after date" },
    month_without_ago = { &["search", "x", "--before", "1mo"], "invalid --before date" },
)]
fn bad_relative_dates_are_rejected(args: &[&str], message: &str) {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message))
        .stderr(predicate::str::contains("hint: use \"1h ago\""))
        .stderr(predicate::str::contains("cannot connect").not());
}

#[test]
fn reversed_range_is_rejected() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["messages", "!c", "--after", "today", "--before", "2d ago"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date range"));
}

#[parameterized(
    months = { "2mo" },
    past_form = { "1h ago" },
    words = { "next week" },
)]
fn bad_reminder_times_are_rejected(time: &str) {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["reminders", "set", "!c", time])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time format"))
        .stderr(predicate::str::contains("\"tomorrow\""));
}

#[test]
fn valid_dates_reach_the_api() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .args(["messages", "!c", "--after", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot connect"));
}

#[test]
fn empty_search_is_rejected() {
    let temp = TempDir::new().unwrap();
    beepctl(&temp)
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to search for"));
}
