// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Beeper Desktop API client.
//!
//! [`BeeperClient`] issues typed requests through a [`Transport`]. The
//! production transport speaks HTTP; tests substitute a mock.

mod client;
mod transport;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{BeeperClient, FocusTarget, CHAT_PAGE_SIZE, MESSAGE_PAGE_SIZE};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};
pub use types::{
    Account, Asset, Attachment, Chat, Message, MessageSearchPage, Page, Reaction, SentMessage,
    User,
};
