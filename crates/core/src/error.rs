// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for beep-core operations.

use thiserror::Error;

/// All possible errors that can occur in beep-core operations.
///
/// Messages enumerate the accepted input forms so the CLI can surface them
/// verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date format: \"{input}\"\n  hint: use \"1h ago\", \"2d ago\", \"3w ago\", \"1mo ago\", \"yesterday\", or \"today\"")]
    InvalidDateFormat { input: String },

    #[error("invalid time format: \"{input}\"\n  hint: use \"30m\", \"1h\", \"2d\", \"1w\", \"tomorrow\", or ISO date")]
    InvalidTimeFormat { input: String },

    #[error("invalid date range: --after ({after}) must be before --before ({before})")]
    InvalidDateRange { after: String, before: String },

    #[error("invalid {field}: '{value}'\n  hint: valid values are: {valid}")]
    InvalidFilterValue {
        field: &'static str,
        value: String,
        valid: &'static str,
    },
}

/// A specialized Result type for beep-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
