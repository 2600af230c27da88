// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use beep_core::{AliasTable, ClockSource};
use tracing::debug;

use super::{date_window, network_label, network_map, resolve_chat_id};
use crate::api::{BeeperClient, Transport};
use crate::cli::DateRangeArgs;
use crate::colors;
use crate::display::{message_lines, separator};
use crate::error::Result;

/// List the newest messages of a chat within an optional date window.
pub fn run<T: Transport, C: ClockSource>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    chat: &str,
    limit: usize,
    dates: &DateRangeArgs,
    clock: &C,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    let window = date_window(dates, clock)?;
    debug!(chat = %chat_id, limit, ?window, "listing messages");

    let networks = network_map(client)?;
    let messages = client.list_messages(&chat_id, limit, &window)?;
    let filters = dates.describe();

    if messages.is_empty() {
        writeln!(
            out,
            "{}",
            colors::warn(&format!("No messages found in chat {chat_id}"))
        )?;
        if filters.is_some() {
            writeln!(out, "{}", colors::dim("   Try adjusting the date filters"))?;
        }
        return Ok(());
    }

    let filters = filters
        .map(|f| colors::dim(&format!(" [{f}]")))
        .unwrap_or_default();
    writeln!(
        out,
        "{}{filters}",
        colors::bold(&format!("Messages in {chat_id} ({})", messages.len()))
    )?;
    writeln!(out, "{}", separator())?;

    for (i, msg) in messages.iter().enumerate() {
        for line in message_lines(msg, i, network_label(&networks, &msg.account_id), None) {
            writeln!(out, "{line}")?;
        }
        if i + 1 < messages.len() {
            writeln!(out, "{}", separator())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
