// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::api::{BeeperClient, Chat, Transport};
use crate::colors;
use crate::display::{separator, truncate};
use crate::error::Result;

const PREVIEW_WIDTH: usize = 50;

/// List recent chats, or chats matching `search`.
pub fn run<T: Transport>(
    client: &BeeperClient<T>,
    limit: usize,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let search = search.map(str::trim).filter(|s| !s.is_empty());
    let chats = match search {
        Some(query) => client.search_chats(query, limit)?,
        None => client.list_chats(limit)?,
    };

    if chats.is_empty() {
        writeln!(out, "{}", colors::warn("No chats found."))?;
        return Ok(());
    }

    let title = match search {
        Some(query) => format!("Chats matching \"{query}\""),
        None => "Recent Chats".to_string(),
    };
    writeln!(out, "{}", colors::bold(&format!("{title} ({})", chats.len())))?;
    writeln!(out, "{}", separator())?;

    for (i, chat) in chats.iter().enumerate() {
        write_chat(out, i, chat)?;
        if i + 1 < chats.len() {
            writeln!(out, "{}", separator())?;
        }
    }
    Ok(())
}

fn write_chat(out: &mut impl Write, index: usize, chat: &Chat) -> Result<()> {
    let unread = if chat.unread_count > 0 {
        colors::error(&format!(" ({} unread)", chat.unread_count))
    } else {
        String::new()
    };
    let mut flags = Vec::new();
    if chat.is_pinned {
        flags.push("pinned");
    }
    if chat.is_muted {
        flags.push("muted");
    }
    if chat.is_archived {
        flags.push("archived");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        colors::dim(&format!(" {{{}}}", flags.join(", ")))
    };

    writeln!(
        out,
        "{} {} {}{unread}{flags}",
        colors::dim(&format!("{}.", index + 1)),
        colors::bold(chat.display_name()),
        colors::dim(&format!("[{}]", chat.network_label())),
    )?;
    writeln!(out, "{}", colors::dim(&format!("   ID: {}", chat.id)))?;

    if let Some(text) = chat
        .preview
        .as_ref()
        .and_then(|p| p.text.as_deref())
        .filter(|t| !t.is_empty())
    {
        let preview = truncate(&text.replace('\n', " "), PREVIEW_WIDTH);
        writeln!(out, "{}", colors::dim(&format!("   > {preview}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "chats_tests.rs"]
mod tests;
