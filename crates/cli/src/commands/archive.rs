// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use beep_core::AliasTable;

use super::resolve_chat_id;
use crate::api::{BeeperClient, Transport};
use crate::colors;
use crate::error::Result;

pub fn run<T: Transport>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    chat: &str,
    unarchive: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    let archived = !unarchive;
    client.archive_chat(&chat_id, archived)?;

    if !quiet {
        let action = if archived { "archived" } else { "unarchived" };
        writeln!(out, "{}", colors::success(&format!("Chat {action}")))?;
        writeln!(out, "{}", colors::dim(&format!("   Chat: {chat_id}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
