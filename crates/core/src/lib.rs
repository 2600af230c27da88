// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! beep-core: Pure parsing and resolution utilities for beepctl.
//!
//! Nothing in this crate performs I/O. The CLI calls into it to turn
//! human-friendly input into values the Beeper Desktop API understands:
//!
//! - [`dates`] - relative (`"2d ago"`) and future (`"30m"`) time expressions
//! - [`alias`] - short alias names to full chat identifiers
//! - [`search`] - date windows and message search filter assembly
//! - [`clock`] - injectable wall clock

pub mod alias;
pub mod clock;
pub mod dates;
pub mod error;
pub mod search;

pub use alias::{is_valid_alias_name, is_valid_chat_id, resolve_alias, AliasTable};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use dates::{
    parse_future_time, parse_future_time_with, parse_relative_date, parse_relative_date_with,
    to_iso8601,
};
pub use error::{Error, Result};
pub use search::{ChatType, DateWindow, MediaType, MessageSearch, Sender};
