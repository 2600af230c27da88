// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chat aliases: short user-chosen names for full chat identifiers.
//!
//! ```text
//! work   -> !abc123:beeper.local
//! family -> !xyz789:beeper.local
//! ```

use std::collections::BTreeMap;

/// Alias name to chat identifier, ordered by name for stable listing.
pub type AliasTable = BTreeMap<String, String>;

/// Resolve user input to a chat identifier.
///
/// Lookup order:
/// 1. an exact alias name in `table`
/// 2. input that already starts with `!` passes through unchanged
/// 3. otherwise `None`; callers decide whether that is fatal
pub fn resolve_alias<'a>(input: &'a str, table: &'a AliasTable) -> Option<&'a str> {
    if let Some(chat_id) = table.get(input).filter(|id| !id.is_empty()) {
        return Some(chat_id.as_str());
    }
    if input.starts_with('!') {
        return Some(input);
    }
    None
}

/// Alias names are non-empty ASCII letters, digits, and underscores.
pub fn is_valid_alias_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A chat ID only needs to start with `!`; the rest is owned by the server.
pub fn is_valid_chat_id(id: &str) -> bool {
    id.starts_with('!')
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
