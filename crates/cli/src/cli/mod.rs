// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{DateRangeArgs, LimitArgs, SearchArgs, DEFAULT_LIMIT};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "beepctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Read and send messages through Beeper Desktop from the terminal")]
#[command(
    long_about = "Read and send messages through Beeper Desktop from the terminal.\n\n\
    Talks to the Beeper Desktop API on this machine. Enable it under Settings > Developers."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Log requests and config handling to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reading
    // ─────────────────────────────────────────────────────────────────────────
    /// List connected accounts
    Accounts,

    /// List recent chats, or search them by name
    #[command(after_help = colors::examples("\
Examples:
  beepctl chats                 Most recent 20 chats
  beepctl chats -l 50           Most recent 50 chats
  beepctl chats -s family       Chats whose name matches \"family\""))]
    Chats {
        #[command(flatten)]
        limit: LimitArgs,

        /// Search chats by name
        #[arg(long, short)]
        search: Option<String>,
    },

    /// List messages in a chat
    #[command(after_help = colors::examples("\
Examples:
  beepctl messages work                         Latest messages in the \"work\" alias
  beepctl messages <chat-id> -l 5               Latest five messages
  beepctl messages work --after \"2d ago\"        Messages from the last two days
  beepctl messages work --before yesterday      Messages before yesterday"))]
    Messages {
        /// Chat ID or alias
        chat: String,

        #[command(flatten)]
        limit: LimitArgs,

        #[command(flatten)]
        dates: DateRangeArgs,
    },

    /// Search messages and chats
    #[command(after_help = colors::examples("\
Examples:
  beepctl search invoice                        Messages and chats matching \"invoice\"
  beepctl search invoice --after \"1w ago\"       Only the last week
  beepctl search --chat work --sender me        Everything you sent in \"work\"
  beepctl search --media image --chat-type dm   Images in direct messages"))]
    Search(SearchArgs),

    /// Search contacts on an account
    #[command(subcommand)]
    Contacts(ContactsCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Acting
    // ─────────────────────────────────────────────────────────────────────────
    /// Send a message to a chat
    #[command(after_help = colors::examples("\
Examples:
  beepctl send work \"On my way\"                 Send to an alias
  beepctl send <chat-id> \"Hi\" --dry-run         Show what would be sent"))]
    Send {
        /// Chat ID or alias
        chat: String,

        /// Message text
        #[arg(value_parser = non_empty_string)]
        message: String,

        /// Show what would be sent without sending
        #[arg(long, short = 'd')]
        dry_run: bool,
    },

    /// Archive or unarchive a chat
    Archive {
        /// Chat ID or alias
        chat: String,

        /// Unarchive instead of archiving
        #[arg(long, short)]
        unarchive: bool,

        /// Don't print a confirmation
        #[arg(long, short)]
        quiet: bool,
    },

    /// Set or clear chat reminders
    #[command(subcommand)]
    Reminders(RemindersCommand),

    /// Download a message attachment
    Download {
        /// Content URL (mxc:// or localmxc://)
        url: String,

        /// Copy the file to this path
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Bring Beeper Desktop to the foreground
    Focus {
        /// Chat ID or alias to open
        chat: Option<String>,

        /// Jump to a message
        #[arg(long, short, value_name = "ID")]
        message: Option<String>,

        /// Pre-fill the draft text
        #[arg(long, short, value_name = "TEXT")]
        draft: Option<String>,

        /// Pre-fill a draft attachment
        #[arg(long, short, value_name = "PATH")]
        attachment: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage the API token
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Manage chat aliases (lists them by default)
    Alias {
        #[command(subcommand)]
        command: Option<AliasCommand>,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  beepctl completion bash > ~/.local/share/bash-completion/completions/beepctl
  beepctl completion zsh > ~/.zfunc/_beepctl"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Token management commands.
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Save an API token
    Set {
        /// Token from Beeper Desktop (Settings > Developers)
        #[arg(value_parser = non_empty_string)]
        token: String,
    },

    /// Show the token, API URL and where each comes from
    Show,

    /// Remove the saved configuration
    Clear,
}

/// Alias management commands.
#[derive(Subcommand)]
pub enum AliasCommand {
    /// List all aliases
    #[command(visible_alias = "ls")]
    List,

    /// Add or replace an alias
    #[command(after_help = colors::examples("\
Examples:
  beepctl alias add work \"!abc123:beeper.local\"   Name a chat \"work\""))]
    Add {
        /// Alias name (letters, numbers, underscores)
        name: String,

        /// Chat ID (starts with '!')
        chat_id: String,
    },

    /// Remove an alias
    #[command(visible_alias = "rm")]
    Remove {
        /// Alias name
        name: String,
    },

    /// Show the chat ID behind an alias
    Show {
        /// Alias name
        name: String,
    },
}

/// Reminder commands.
#[derive(Subcommand)]
pub enum RemindersCommand {
    /// Set a reminder for a chat
    #[command(after_help = colors::examples("\
Examples:
  beepctl reminders set work 30m                  In thirty minutes
  beepctl reminders set work tomorrow             Tomorrow at 9:00
  beepctl reminders set work 2025-06-01T10:00     At a specific time
  beepctl reminders set work 1d -d                Unless someone writes first"))]
    Set {
        /// Chat ID or alias
        chat: String,

        /// When to remind: 30m, 1h, 2d, 1w, tomorrow, or ISO date
        time: String,

        /// Cancel the reminder if someone messages in the chat
        #[arg(long, short = 'd')]
        dismiss_on_message: bool,
    },

    /// Clear a chat's reminder
    Clear {
        /// Chat ID or alias
        chat: String,
    },
}

/// Contact commands.
#[derive(Subcommand)]
pub enum ContactsCommand {
    /// Search contacts on an account
    Search {
        /// Account ID (see 'beepctl accounts')
        account: String,

        /// Name, username, phone number or email
        query: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
