// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use beep_core::AliasTable;

use super::resolve_chat_id;
use crate::api::{BeeperClient, FocusTarget, Transport};
use crate::colors;
use crate::error::{Error, Result};

/// What to open once the app is in front.
#[derive(Debug, Default)]
pub struct FocusArgs<'a> {
    pub chat: Option<&'a str>,
    pub message: Option<&'a str>,
    pub draft: Option<&'a str>,
    pub attachment: Option<&'a Path>,
}

pub fn run<T: Transport>(
    client: &BeeperClient<T>,
    aliases: &AliasTable,
    args: &FocusArgs<'_>,
    out: &mut impl Write,
) -> Result<()> {
    let chat_id = args
        .chat
        .map(|chat| resolve_chat_id(chat, aliases))
        .transpose()?;
    let target = FocusTarget {
        chat_id: chat_id.clone(),
        message_id: args.message.map(str::to_string),
        draft_text: args.draft.map(str::to_string),
        draft_attachment_path: args
            .attachment
            .map(|p| p.to_string_lossy().into_owned()),
    };

    if !client.focus(&target)? {
        return Err(Error::FocusFailed);
    }

    writeln!(out, "{}", colors::success("Beeper Desktop focused"))?;
    if let Some(id) = chat_id {
        writeln!(out, "{}", colors::dim(&format!("   Chat: {id}")))?;
    }
    if let Some(draft) = args.draft {
        writeln!(out, "{}", colors::dim(&format!("   Draft: {draft}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "focus_tests.rs"]
mod tests;
