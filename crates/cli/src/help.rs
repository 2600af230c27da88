// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);
    let error = fg(colors::codes::ERROR);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
        .invalid(error)
        .error(error)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let rows: [(&str, &[(&str, &str)]); 3] = [
        (
            "Reading:",
            &[
                ("accounts", "List connected accounts"),
                ("chats", "List or search chats"),
                ("messages", "List messages in a chat"),
                ("search", "Search messages and chats"),
                ("contacts", "Search contacts on an account"),
            ],
        ),
        (
            "Acting:",
            &[
                ("send", "Send a message"),
                ("archive", "Archive or unarchive a chat"),
                ("reminders", "Set or clear chat reminders"),
                ("download", "Download a message attachment"),
                ("focus", "Bring Beeper Desktop to the foreground"),
            ],
        ),
        (
            "Setup:",
            &[
                ("auth", "Manage the API token"),
                ("alias", "Manage chat aliases"),
                ("completion", "Generate shell completions"),
            ],
        ),
    ];

    rows.iter()
        .map(|(title, cmds)| {
            let mut section = colors::header(title);
            for (name, about) in cmds.iter() {
                section.push_str(&format!("\n  {}{about}", pad_literal(name, 12)));
            }
            section
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A colorized command name padded to `width` visible columns.
fn pad_literal(name: &str, width: usize) -> String {
    let pad = width.saturating_sub(name.len()).max(1);
    format!("{}{}", colors::literal(name), " ".repeat(pad))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  beepctl auth set <token>                 Save your API token
  beepctl chats                            List recent chats
  beepctl alias add work <chat-id>         Name a chat
  beepctl send work \"On my way\"            Send a message
  beepctl search \"invoice\" --after 1w ago  Search the last week",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
