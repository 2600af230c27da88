// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search filter assembly.
//!
//! [`DateWindow`] bounds results by time; [`MessageSearch`] collects every
//! message-search criterion and renders them as HTTP query parameters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::dates::to_iso8601;
use crate::error::{Error, Result};

/// An optional open interval `(after, before)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl DateWindow {
    /// Creates a window, rejecting `after >= before` when both are set.
    pub fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(a), Some(b)) = (after, before) {
            if a >= b {
                return Err(Error::InvalidDateRange {
                    after: to_iso8601(&a),
                    before: to_iso8601(&b),
                });
            }
        }
        Ok(DateWindow { after, before })
    }

    pub fn after(&self) -> Option<DateTime<Utc>> {
        self.after
    }

    pub fn before(&self) -> Option<DateTime<Utc>> {
        self.before
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }

    /// Both bounds are exclusive.
    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        self.after.map_or(true, |a| *ts > a) && self.before.map_or(true, |b| *ts < b)
    }
}

/// Restrict search to one-to-one or group chats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatType {
    Single,
    Group,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Single => "single",
            ChatType::Group => "group",
        }
    }
}

impl FromStr for ChatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "single" | "dm" => Ok(ChatType::Single),
            "group" => Ok(ChatType::Group),
            _ => Err(Error::InvalidFilterValue {
                field: "chat type",
                value: s.to_string(),
                valid: "single, group",
            }),
        }
    }
}

/// Who sent the messages being searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Me,
    Others,
    /// A specific user ID.
    Id(String),
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Me => write!(f, "me"),
            Sender::Others => write!(f, "others"),
            Sender::Id(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Sender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(Error::InvalidFilterValue {
                field: "sender",
                value: s.to_string(),
                valid: "me, others, or a user ID",
            }),
            "me" => Ok(Sender::Me),
            "others" => Ok(Sender::Others),
            _ => Ok(Sender::Id(trimmed.to_string())),
        }
    }
}

/// Attachment kinds a message must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Any,
    Image,
    Video,
    Link,
    File,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Any => "any",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Link => "link",
            MediaType::File => "file",
        }
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "any" => Ok(MediaType::Any),
            "image" | "img" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "link" => Ok(MediaType::Link),
            "file" => Ok(MediaType::File),
            _ => Err(Error::InvalidFilterValue {
                field: "media type",
                value: s.to_string(),
                valid: "any, image, video, link, file",
            }),
        }
    }
}

/// Criteria for a message search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSearch {
    /// Free text; blank text is treated as absent.
    pub query: Option<String>,
    /// Full chat IDs (aliases already resolved).
    pub chat_ids: Vec<String>,
    pub account_ids: Vec<String>,
    pub chat_type: Option<ChatType>,
    pub sender: Option<Sender>,
    pub media_types: Vec<MediaType>,
    pub window: DateWindow,
    pub include_muted: bool,
    pub exclude_low_priority: bool,
    pub limit: Option<usize>,
}

impl MessageSearch {
    /// Search for `query` with no other criteria.
    pub fn for_query(query: impl Into<String>) -> Self {
        MessageSearch {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// The query text, if non-blank.
    pub fn query_text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// True when no criterion narrows the search. `limit` and the boolean
    /// toggles do not count.
    pub fn is_empty(&self) -> bool {
        self.query_text().is_none()
            && self.chat_ids.is_empty()
            && self.account_ids.is_empty()
            && self.chat_type.is_none()
            && self.sender.is_none()
            && self.media_types.is_empty()
            && self.window.is_unbounded()
    }

    /// Render as HTTP query parameters. Unset criteria are omitted; list
    /// criteria repeat their key.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(query) = self.query_text() {
            push("query", query.to_string());
        }
        for id in &self.chat_ids {
            push("chatIDs", id.clone());
        }
        for id in &self.account_ids {
            push("accountIDs", id.clone());
        }
        if let Some(chat_type) = self.chat_type {
            push("chatType", chat_type.as_str().to_string());
        }
        if let Some(sender) = &self.sender {
            push("sender", sender.to_string());
        }
        for media in &self.media_types {
            push("mediaTypes", media.as_str().to_string());
        }
        if let Some(after) = self.window.after() {
            push("dateAfter", to_iso8601(&after));
        }
        if let Some(before) = self.window.before() {
            push("dateBefore", to_iso8601(&before));
        }
        if self.include_muted {
            push("includeMuted", "true".to_string());
        }
        if self.exclude_low_priority {
            push("excludeLowPriority", "true".to_string());
        }
        if let Some(limit) = self.limit {
            push("limit", limit.to_string());
        }

        pairs
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
