// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use beep_core::{is_valid_alias_name, is_valid_chat_id, AliasTable};
use tracing::info;

use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};

pub fn list(aliases: &AliasTable, out: &mut impl Write) -> Result<()> {
    if aliases.is_empty() {
        writeln!(out, "No aliases saved")?;
        writeln!(
            out,
            "{}",
            colors::dim("  hint: beepctl alias add <name> <chat-id>")
        )?;
        return Ok(());
    }

    let width = aliases.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    writeln!(out, "{}", colors::bold(&format!("Aliases ({})", aliases.len())))?;
    for (name, chat_id) in aliases {
        writeln!(
            out,
            "  {}  {}",
            colors::accent(&format!("{name:<width$}")),
            colors::dim(chat_id)
        )?;
    }
    Ok(())
}

/// Add or replace an alias in the config file in `dir`.
pub fn add(dir: &Path, name: &str, chat_id: &str, out: &mut impl Write) -> Result<()> {
    if !is_valid_alias_name(name) {
        return Err(Error::InvalidAliasName(name.to_string()));
    }
    if !is_valid_chat_id(chat_id) {
        return Err(Error::InvalidChatIdFormat(chat_id.to_string()));
    }

    let mut config = Config::load_from(dir)?;
    let previous = config.aliases.insert(name.to_string(), chat_id.to_string());
    config.save_to(dir)?;
    info!(alias = name, "alias saved");

    if let Some(previous) = previous.filter(|p| p != chat_id) {
        writeln!(
            out,
            "{}",
            colors::warn(&format!("Replaced '{name}' (was {previous})"))
        )?;
    }
    writeln!(out, "{}", colors::success(&format!("Alias '{name}' -> {chat_id}")))?;
    Ok(())
}

pub fn remove(dir: &Path, name: &str, out: &mut impl Write) -> Result<()> {
    let mut config = Config::load_from(dir)?;
    if config.aliases.remove(name).is_none() {
        return Err(Error::AliasNotFound(name.to_string()));
    }
    config.save_to(dir)?;
    info!(alias = name, "alias removed");
    writeln!(out, "{}", colors::success(&format!("Removed alias '{name}'")))?;
    Ok(())
}

pub fn show(aliases: &AliasTable, name: &str, out: &mut impl Write) -> Result<()> {
    let chat_id = aliases
        .get(name)
        .ok_or_else(|| Error::AliasNotFound(name.to_string()))?;
    writeln!(out, "{chat_id}")?;
    Ok(())
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
