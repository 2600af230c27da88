// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common options.

use clap::Args;

/// Default number of results for listing commands.
pub const DEFAULT_LIMIT: usize = 20;

/// Parse a result limit of at least 1.
fn positive_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{s}' is not a number")),
    }
}

/// Limit arguments for paginated results.
#[derive(Args, Clone, Debug)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT, value_parser = positive_limit)]
    pub limit: usize,
}

impl Default for LimitArgs {
    fn default() -> Self {
        LimitArgs {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Relative date bounds, e.g. `--after "2d ago" --before today`.
#[derive(Args, Clone, Debug, Default)]
pub struct DateRangeArgs {
    /// Only results after this date ("1h ago", "2d ago", "3w ago", "1mo ago", "yesterday", "today")
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only results before this date (same formats as --after)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,
}

impl DateRangeArgs {
    /// Human summary of the bounds given, e.g. `after: 2d ago, before: today`.
    pub fn describe(&self) -> Option<String> {
        let parts: Vec<String> = [("after", &self.after), ("before", &self.before)]
            .into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v}")))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Message search criteria.
#[derive(Args, Clone, Debug, Default)]
pub struct SearchArgs {
    /// Text to search for
    pub query: Option<String>,

    #[command(flatten)]
    pub limit: LimitArgs,

    /// Restrict to chats (ID or alias; comma-separated or repeated)
    #[arg(long, short = 'c', value_delimiter = ',', value_name = "CHAT")]
    pub chat: Vec<String>,

    /// Restrict to accounts (comma-separated or repeated)
    #[arg(long, short = 'a', value_delimiter = ',', value_name = "ACCOUNT")]
    pub account: Vec<String>,

    #[command(flatten)]
    pub dates: DateRangeArgs,

    /// Who sent the message: me, others, or a user ID
    #[arg(long, short = 's')]
    pub sender: Option<String>,

    /// Kind of chat: single (or dm), group
    #[arg(long, value_name = "TYPE")]
    pub chat_type: Option<String>,

    /// Media filter: any, image, video, link, file (comma-separated or repeated)
    #[arg(long, short = 'm', value_delimiter = ',', value_name = "TYPE")]
    pub media: Vec<String>,

    /// Include chats that are muted
    #[arg(long)]
    pub include_muted: bool,

    /// Leave out low-priority chats
    #[arg(long)]
    pub exclude_low_priority: bool,
}
