// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use beep_core::{AliasTable, ChatType, ClockSource, MediaType, MessageSearch, Sender};
use tracing::debug;

use super::{date_window, network_label, network_map, resolve_chat_id};
use crate::api::{BeeperClient, Chat, Transport};
use crate::cli::SearchArgs;
use crate::colors;
use crate::display::{message_lines, separator, thin_separator};
use crate::error::{Error, Result};

/// Most chats shown alongside message results.
pub const MAX_CHAT_MATCHES: usize = 5;

/// Turn command-line criteria into a [`MessageSearch`].
///
/// Chat arguments go through the alias table and filter values are
/// validated before anything is sent.
pub fn build_search<C: ClockSource>(
    args: &SearchArgs,
    aliases: &AliasTable,
    clock: &C,
) -> Result<MessageSearch> {
    let search = MessageSearch {
        query: args.query.clone(),
        chat_ids: args
            .chat
            .iter()
            .filter(|c| !c.trim().is_empty())
            .map(|c| resolve_chat_id(c.trim(), aliases))
            .collect::<Result<_>>()?,
        account_ids: args
            .account
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
        chat_type: args
            .chat_type
            .as_deref()
            .map(str::parse::<ChatType>)
            .transpose()?,
        sender: args
            .sender
            .as_deref()
            .map(str::parse::<Sender>)
            .transpose()?,
        media_types: args
            .media
            .iter()
            .filter(|m| !m.trim().is_empty())
            .map(|m| m.trim().parse::<MediaType>())
            .collect::<beep_core::Result<_>>()?,
        window: date_window(&args.dates, clock)?,
        include_muted: args.include_muted,
        exclude_low_priority: args.exclude_low_priority,
        limit: Some(args.limit.limit),
    };

    if search.is_empty() {
        return Err(Error::EmptySearch);
    }
    Ok(search)
}

/// Search messages, and chats by name when there is query text.
pub fn run<T: Transport, C: ClockSource>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    args: &SearchArgs,
    clock: &C,
    out: &mut impl Write,
) -> Result<()> {
    let search = build_search(args, aliases, clock)?;
    debug!(params = ?search.to_query_pairs(), "searching");

    let networks = network_map(client)?;
    let mut results = client.search_messages(&search)?;
    results.items.truncate(args.limit.limit);
    let chats = match search.query_text() {
        Some(query) => {
            let mut chats = client.search_chats(query, MAX_CHAT_MATCHES)?;
            chats.truncate(MAX_CHAT_MATCHES);
            chats
        }
        None => Vec::new(),
    };

    let label = search
        .query_text()
        .map(|q| format!("\"{q}\""))
        .unwrap_or_else(|| "these filters".to_string());

    if results.items.is_empty() && chats.is_empty() {
        writeln!(out, "{}", colors::warn(&format!("No results found for {label}")))?;
        return Ok(());
    }

    if !chats.is_empty() {
        write_chats(out, &chats)?;
    }

    if !results.items.is_empty() {
        if !chats.is_empty() {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{}",
            colors::bold(&format!("Matching Messages ({})", results.items.len()))
        )?;
        writeln!(out, "{}", separator())?;

        let query = search.query_text();
        for (i, msg) in results.items.iter().enumerate() {
            for line in message_lines(msg, i, network_label(&networks, &msg.account_id), query) {
                writeln!(out, "{line}")?;
            }
            let chat_name = results
                .chats
                .get(&msg.chat_id)
                .map(|c| format!("{} ({})", c.display_name(), msg.chat_id))
                .unwrap_or_else(|| msg.chat_id.clone());
            writeln!(out, "{}", colors::dim(&format!("   in {chat_name}")))?;
            if i + 1 < results.items.len() {
                writeln!(out, "{}", separator())?;
            }
        }
    }

    if results.has_more {
        writeln!(
            out,
            "{}",
            colors::dim("More messages match; raise --limit or narrow the search.")
        )?;
    }
    Ok(())
}

fn write_chats(out: &mut impl Write, chats: &[Chat]) -> Result<()> {
    writeln!(
        out,
        "{}",
        colors::bold(&format!("Matching Chats ({})", chats.len()))
    )?;
    writeln!(out, "{}", separator())?;
    for (i, chat) in chats.iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            colors::dim(&format!("{}.", i + 1)),
            colors::bold(chat.display_name())
        )?;
        writeln!(out, "{}", colors::dim(&format!("   ID: {}", chat.id)))?;
        if i + 1 < chats.len() {
            writeln!(out, "{}", thin_separator())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
