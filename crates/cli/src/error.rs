// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the beepctl library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] beep_core::Error),

    #[error("invalid --{option} date: {source}")]
    InvalidDate {
        option: &'static str,
        #[source]
        source: beep_core::Error,
    },

    #[error("could not resolve chat: '{0}'\n  hint: use a chat ID starting with '!' or add an alias with 'beepctl alias add <name> <chat-id>'")]
    InvalidChatId(String),

    #[error("invalid alias name: '{0}'\n  hint: alias names may only contain letters, numbers, and underscores")]
    InvalidAliasName(String),

    #[error("invalid chat ID: '{0}'\n  hint: chat IDs start with '!'")]
    InvalidChatIdFormat(String),

    #[error("alias not found: '{0}'\n  hint: run 'beepctl alias list' to see saved aliases")]
    AliasNotFound(String),

    #[error("nothing to search for\n  hint: pass a query or at least one filter such as --chat, --sender or --after")]
    EmptySearch,

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{}", api_message(.status, .message))]
    Api { status: u16, message: String },

    #[error("cannot connect to Beeper Desktop API at {url}\n  hint: is Beeper Desktop running with the API enabled? (Settings > Developers)")]
    Connection { url: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("failed to focus Beeper Desktop\n  hint: is Beeper Desktop running?")]
    FocusFailed,

    #[error("download failed: {0}")]
    DownloadFailed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Render an API error with the hint matching its status code.
fn api_message(status: &u16, message: &str) -> String {
    let hint = match *status {
        401 => Some("check your token with 'beepctl auth show'"),
        403 => Some("permission denied, check token permissions"),
        404 => Some("not found, check the chat ID or alias"),
        _ => None,
    };
    match hint {
        Some(hint) => format!("api error ({status}): {message}\n  hint: {hint}"),
        None => format!("api error ({status}): {message}"),
    }
}

/// A specialized Result type for beepctl operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
