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
    message: &str,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    let sent = client.send_message(&chat_id, message)?;
    writeln!(out, "{}", colors::success("Message sent"))?;
    if let Some(id) = sent.message_id.as_deref() {
        writeln!(out, "  ID:   {}", colors::dim(id))?;
    }
    writeln!(out, "  To:   {}", colors::accent(&chat_id))?;
    writeln!(out, "  Text: {message}")?;
    Ok(())
}

/// Show what `run` would send. Needs no client.
pub fn dry_run(
    aliases: &AliasTable,
    chat: &str,
    message: &str,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    writeln!(out, "{}", colors::warn("Dry run: message NOT sent"))?;
    writeln!(out, "  Chat:    {}", colors::accent(&chat_id))?;
    writeln!(out, "  Message: {}", colors::success(message))?;
    Ok(())
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
