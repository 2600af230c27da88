// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::api::mock::MockTransport;
use crate::commands::testing::{accounts_json, aliases, capture, clock, message_json};
use crate::error::Error;
use serde_json::json;

fn dates(after: Option<&str>, before: Option<&str>) -> DateRangeArgs {
    DateRangeArgs {
        after: after.map(str::to_string),
        before: before.map(str::to_string),
    }
}

#[test]
fn prints_messages_with_network() {
    let client = MockTransport::new()
        .respond(accounts_json())
        .respond(json!({
            "items": [
                message_json("m2", "2025-03-15T11:00:00Z", "second"),
                message_json("m1", "2025-03-15T10:00:00Z", "first"),
            ],
            "hasMore": false
        }))
        .into_client();
    let table = aliases(&[("work", "!chat:beeper.local")]);

    let output = capture(|out| {
        run(&client, &table, "work", 20, &dates(None, None), &clock(), out)
    })
    .unwrap();

    assert!(output.starts_with("Messages in !chat:beeper.local (2)\n"));
    assert!(output.contains("1. Bob [Signal]"));
    assert!(output.contains("   second"));
    assert!(output.contains("2. Bob [Signal]"));

    let requests = client.transport().requests();
    assert_eq!(requests[0].path(), "/v1/accounts");
    assert_eq!(requests[1].path(), "/v1/chats/!chat:beeper.local/messages");
}

#[test]
fn window_filters_client_side() {
    // Clock is 2025-03-15T12:00Z; "2h ago" is 10:00Z, exclusive.
    let client = MockTransport::new()
        .respond(accounts_json())
        .respond(json!({
            "items": [
                message_json("new", "2025-03-15T11:30:00Z", "recent"),
                message_json("edge", "2025-03-15T10:00:00Z", "on the boundary"),
                message_json("old", "2025-03-15T09:00:00Z", "too old"),
            ],
            "hasMore": true,
            "oldestCursor": "c1"
        }))
        .into_client();

    let output = capture(|out| {
        run(
            &client,
            &AliasTable::new(),
            "!chat:beeper.local",
            20,
            &dates(Some("2h ago"), None),
            &clock(),
            out,
        )
    })
    .unwrap();

    assert!(output.starts_with("Messages in !chat:beeper.local (1) [after: 2h ago]"));
    assert!(output.contains("recent"));
    assert!(!output.contains("on the boundary"));
    assert!(!output.contains("too old"));
    assert_eq!(client.transport().requests().len(), 2);
}

#[test]
fn empty_result_suggests_adjusting_filters() {
    let client = MockTransport::new()
        .respond(accounts_json())
        .respond(json!({"items": []}))
        .into_client();
    let output = capture(|out| {
        run(
            &client,
            &AliasTable::new(),
            "!c",
            20,
            &dates(Some("1d ago"), None),
            &clock(),
            out,
        )
    })
    .unwrap();
    assert!(output.starts_with("No messages found in chat !c"));
    assert!(output.contains("Try adjusting the date filters"));
}

#[test]
fn unknown_chat_fails_before_any_request() {
    let client = MockTransport::new().into_client();
    let err = capture(|out| {
        run(&client, &AliasTable::new(), "work", 20, &dates(None, None), &clock(), out)
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidChatId(_)));
    assert!(client.transport().requests().is_empty());
}

#[test]
fn bad_date_fails_before_any_request() {
    let client = MockTransport::new().into_client();
    let err = capture(|out| {
        run(
            &client,
            &AliasTable::new(),
            "!c",
            20,
            &dates(None, Some("last tuesday")),
            &clock(),
            out,
        )
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid --before date:"));
    assert!(client.transport().requests().is_empty());
}
