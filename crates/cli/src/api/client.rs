// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed operations over the Desktop API.

use beep_core::{DateWindow, MessageSearch};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::transport::{ApiRequest, HttpTransport, Transport};
use super::types::{Account, Asset, Chat, Message, MessageSearchPage, Page, SentMessage, User};
use crate::config::Settings;
use crate::error::{Error, Result};

/// Page size requested when listing chats.
pub const CHAT_PAGE_SIZE: usize = 25;
/// Page size requested when listing messages.
pub const MESSAGE_PAGE_SIZE: usize = 50;

/// What to show when focusing the desktop app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FocusTarget {
    #[serde(rename = "chatID", skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(rename = "messageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "draftText", skip_serializing_if = "Option::is_none")]
    pub draft_text: Option<String>,
    #[serde(rename = "draftAttachmentPath", skip_serializing_if = "Option::is_none")]
    pub draft_attachment_path: Option<String>,
}

/// Client for the Beeper Desktop API.
///
/// Built once per process and handed to each command.
pub struct BeeperClient<T: Transport = HttpTransport> {
    transport: T,
}

impl BeeperClient<HttpTransport> {
    /// Create an HTTP client from the effective settings.
    pub fn connect(settings: &Settings) -> Result<Self> {
        debug!(url = %settings.base_url, token = settings.token.is_some(), "creating client");
        let transport = HttpTransport::new(&settings.base_url, settings.token.clone())?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> BeeperClient<T> {
    pub fn with_transport(transport: T) -> Self {
        BeeperClient { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let value = self.transport.execute(&request)?;
        serde_json::from_value(value).map_err(|e| {
            Error::UnexpectedResponse(format!("{} {}: {e}", request.method, request.path()))
        })
    }

    fn call_unit(&self, request: ApiRequest) -> Result<()> {
        self.transport.execute(&request).map(|_| ())
    }

    /// Walk a cursor-paginated listing backwards in time.
    ///
    /// Items failing `keep` are skipped. Paging stops at `limit` kept items,
    /// when the server has no more pages, or when `exhausted` reports that
    /// later pages cannot contain wanted items.
    fn collect_pages<I: DeserializeOwned>(
        &self,
        request: ApiRequest,
        limit: usize,
        keep: impl Fn(&I) -> bool,
        exhausted: impl Fn(&[I]) -> bool,
    ) -> Result<Vec<I>> {
        let mut out = Vec::new();
        let mut cursor: Option<String> = None;

        while out.len() < limit {
            let mut page_request = request.clone();
            if let Some(cursor) = &cursor {
                page_request = page_request
                    .param("cursor", cursor)
                    .param("direction", "before");
            }
            let page: Page<I> = self.call(page_request)?;
            let done = exhausted(&page.items);

            for item in page.items {
                if keep(&item) {
                    out.push(item);
                    if out.len() >= limit {
                        break;
                    }
                }
            }

            match page.oldest_cursor {
                Some(next) if page.has_more && !done && cursor.as_ref() != Some(&next) => {
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        Ok(out)
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        self.call(ApiRequest::get(&["v1", "accounts"]))
    }

    /// Most recently active chats, up to `limit`.
    pub fn list_chats(&self, limit: usize) -> Result<Vec<Chat>> {
        let request = ApiRequest::get(&["v1", "chats"]).param("limit", CHAT_PAGE_SIZE.min(limit));
        self.collect_pages(request, limit, |_: &Chat| true, |_| false)
    }

    /// Chats whose name matches `query`, up to `limit`.
    pub fn search_chats(&self, query: &str, limit: usize) -> Result<Vec<Chat>> {
        let request = ApiRequest::get(&["v1", "chats", "search"])
            .param("query", query)
            .param("limit", limit);
        self.collect_pages(request, limit, |_: &Chat| true, |_| false)
    }

    /// Messages of one chat, newest first, restricted to `window`.
    ///
    /// The window is applied client-side. Paging stops once a page reaches
    /// back past `window.after()`.
    pub fn list_messages(
        &self,
        chat_id: &str,
        limit: usize,
        window: &DateWindow,
    ) -> Result<Vec<Message>> {
        let request = ApiRequest::get(&["v1", "chats", chat_id, "messages"]);
        let after = window.after();
        self.collect_pages(
            request,
            limit,
            |m: &Message| window.contains(&m.timestamp),
            |page| after.is_some_and(|a| page.iter().any(|m| m.timestamp <= a)),
        )
    }

    /// Server-side message search.
    pub fn search_messages(&self, search: &MessageSearch) -> Result<MessageSearchPage> {
        let request = ApiRequest::get(&["v1", "messages", "search"]).params(search.to_query_pairs());
        self.call(request)
    }

    pub fn send_message(&self, chat_id: &str, text: &str) -> Result<SentMessage> {
        self.call(ApiRequest::post(
            &["v1", "chats", chat_id, "messages"],
            json!({ "text": text }),
        ))
    }

    pub fn archive_chat(&self, chat_id: &str, archived: bool) -> Result<()> {
        self.call_unit(ApiRequest::post(
            &["v1", "chats", chat_id, "archive"],
            json!({ "archived": archived }),
        ))
    }

    pub fn set_reminder(
        &self,
        chat_id: &str,
        remind_at_ms: i64,
        dismiss_on_message: bool,
    ) -> Result<()> {
        self.call_unit(ApiRequest::post(
            &["v1", "chats", chat_id, "reminders"],
            json!({
                "reminder": {
                    "remindAtMs": remind_at_ms,
                    "dismissOnIncomingMessage": dismiss_on_message,
                }
            }),
        ))
    }

    pub fn clear_reminder(&self, chat_id: &str) -> Result<()> {
        self.call_unit(ApiRequest::delete(&["v1", "chats", chat_id, "reminders"]))
    }

    pub fn search_contacts(&self, account_id: &str, query: &str) -> Result<Vec<User>> {
        let request =
            ApiRequest::get(&["v1", "accounts", account_id, "contacts"]).param("query", query);
        let page: Page<User> = self.call(request)?;
        Ok(page.items)
    }

    /// Ask the desktop app to fetch an asset and report its local path.
    pub fn download_asset(&self, url: &str) -> Result<Asset> {
        self.call(ApiRequest::post(
            &["v1", "assets", "download"],
            json!({ "url": url }),
        ))
    }

    /// Bring the desktop app forward. Returns whether it reported success.
    pub fn focus(&self, target: &FocusTarget) -> Result<bool> {
        let value = self
            .transport
            .execute(&ApiRequest::post(&["v1", "focus"], serde_json::to_value(target)?))?;
        Ok(value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
