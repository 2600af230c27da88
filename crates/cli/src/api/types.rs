// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Response types of the Desktop API.
//!
//! Only the fields the CLI displays are modelled; unknown fields are ignored.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A connected messaging account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl Account {
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(User::name)
            .unwrap_or(&self.account_id)
    }
}

/// A person on some network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub display_text: Option<String>,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub cannot_message: bool,
}

impl User {
    /// Best human-readable name, if the API sent one.
    pub fn name(&self) -> Option<&str> {
        [&self.full_name, &self.display_text, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

/// A conversation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(rename = "accountID", default)]
    pub account_id: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub chat_type: Option<String>,
    #[serde(default)]
    pub unread_count: u64,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub is_pinned: bool,
    pub last_activity: Option<DateTime<Utc>>,
    pub preview: Option<Box<Message>>,
}

impl Chat {
    pub fn display_name(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Unknown")
    }

    /// Network label, falling back to the account ID.
    pub fn network_label(&self) -> &str {
        if self.network.is_empty() {
            &self.account_id
        } else {
            &self.network
        }
    }
}

/// A message in a chat.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(rename = "chatID", default)]
    pub chat_id: String,
    #[serde(rename = "accountID", default)]
    pub account_id: String,
    #[serde(rename = "senderID", default)]
    pub sender_id: String,
    pub sender_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub text: Option<String>,
    #[serde(default)]
    pub is_sender: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Message {
    pub fn sender(&self) -> &str {
        self.sender_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.sender_id)
    }
}

/// A file attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// `img`, `video`, `audio` or `unknown`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "srcURL")]
    pub src_url: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub reaction_key: String,
    #[serde(rename = "participantID", default)]
    pub participant_id: String,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub oldest_cursor: Option<String>,
    pub newest_cursor: Option<String>,
}

/// Message search results with the chats they belong to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSearchPage {
    #[serde(default)]
    pub items: Vec<Message>,
    #[serde(default)]
    pub chats: BTreeMap<String, Chat>,
    #[serde(default)]
    pub has_more: bool,
    pub oldest_cursor: Option<String>,
}

/// Result of sending a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    #[serde(rename = "chatID", default)]
    pub chat_id: String,
    #[serde(rename = "pendingMessageID", alias = "messageID", alias = "id")]
    pub message_id: Option<String>,
}

/// Where a downloaded asset landed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Asset {
    #[serde(rename = "srcURL")]
    pub src_url: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
