// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod accounts;
pub mod alias;
pub mod archive;
pub mod auth;
pub mod chats;
pub mod contacts;
pub mod download;
pub mod focus;
pub mod messages;
pub mod reminders;
pub mod search;
pub mod send;

use std::collections::HashMap;

use beep_core::{
    parse_relative_date_with, resolve_alias, AliasTable, ClockSource, DateWindow,
};
use chrono::{DateTime, Utc};

use crate::api::{BeeperClient, Transport};
use crate::cli::DateRangeArgs;
use crate::error::{Error, Result};

/// Resolve a chat argument through the alias table.
///
/// Unresolvable input is an error here; every command needs a real chat ID.
pub fn resolve_chat_id(input: &str, aliases: &AliasTable) -> Result<String> {
    resolve_alias(input, aliases)
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidChatId(input.to_string()))
}

/// Parse an optional `--after`/`--before` value.
pub fn parse_date_arg<C: ClockSource>(
    value: Option<&str>,
    option: &'static str,
    clock: &C,
) -> Result<Option<DateTime<Utc>>> {
    value
        .map(|v| {
            parse_relative_date_with(v, clock).map_err(|source| Error::InvalidDate { option, source })
        })
        .transpose()
}

/// Build the date window from `--after`/`--before`.
pub fn date_window<C: ClockSource>(dates: &DateRangeArgs, clock: &C) -> Result<DateWindow> {
    let after = parse_date_arg(dates.after.as_deref(), "after", clock)?;
    let before = parse_date_arg(dates.before.as_deref(), "before", clock)?;
    Ok(DateWindow::new(after, before)?)
}

/// Map account IDs to network names, for labelling messages.
pub fn network_map<T: Transport>(client: &BeeperClient<T>) -> Result<HashMap<String, String>> {
    Ok(client
        .list_accounts()?
        .into_iter()
        .map(|a| {
            let network = if a.network.is_empty() {
                a.account_id.clone()
            } else {
                a.network
            };
            (a.account_id, network)
        })
        .collect())
}

/// Network label for an account, falling back to the ID.
pub fn network_label<'a>(networks: &'a HashMap<String, String>, account_id: &'a str) -> &'a str {
    networks
        .get(account_id)
        .map(String::as_str)
        .unwrap_or(account_id)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
