// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use beep_core::{parse_future_time_with, AliasTable, ClockSource};
use chrono::DateTime;

use super::resolve_chat_id;
use crate::api::{BeeperClient, Transport};
use crate::colors;
use crate::display::format_timestamp;
use crate::error::Result;

/// Schedule a reminder for `time` ("30m", "tomorrow", an ISO date, ...).
pub fn set<T: Transport, C: ClockSource>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    chat: &str,
    time: &str,
    dismiss_on_message: bool,
    clock: &C,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    let remind_at_ms = parse_future_time_with(time, clock)?;
    client.set_reminder(&chat_id, remind_at_ms, dismiss_on_message)?;

    let remind_at = DateTime::from_timestamp_millis(remind_at_ms)
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_else(|| remind_at_ms.to_string());
    writeln!(out, "{}", colors::success("Reminder set"))?;
    writeln!(out, "{}", colors::dim(&format!("   Chat: {chat_id}")))?;
    writeln!(out, "{}", colors::dim(&format!("   Remind at: {remind_at}")))?;
    if dismiss_on_message {
        writeln!(out, "{}", colors::dim("   Dismissed if someone messages first"))?;
    }
    Ok(())
}

pub fn clear<T: Transport>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    chat: &str,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = resolve_chat_id(chat, aliases)?;
    client.clear_reminder(&chat_id)?;
    writeln!(out, "{}", colors::success("Reminder cleared"))?;
    writeln!(out, "{}", colors::dim(&format!("   Chat: {chat_id}")))?;
    Ok(())
}

#[cfg(test)]
#[path = "reminders_tests.rs"]
mod tests;
