// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting helpers shared by command output.

use chrono::{DateTime, Local, TimeZone, Utc};
use regex::{Captures, RegexBuilder};

use crate::api::{Attachment, Message};
use crate::colors;

const SEPARATOR_WIDTH: usize = 50;
const THIN_SEPARATOR_WIDTH: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Heavy rule between list entries.
pub fn separator() -> String {
    colors::dim(&"─".repeat(SEPARATOR_WIDTH))
}

/// Light rule between entries of a secondary list.
pub fn thin_separator() -> String {
    colors::dim(&"┄".repeat(THIN_SEPARATOR_WIDTH))
}

/// Shorten `text` to at most `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Human-readable byte count: `512B`, `1.5KB`, `2.0MB`.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    match bytes {
        b if b < KB => format!("{b}B"),
        b if b < MB => format!("{:.1}KB", b as f64 / KB as f64),
        b => format!("{:.1}MB", b as f64 / MB as f64),
    }
}

/// Short tag for an attachment type.
pub fn attachment_icon(kind: &str) -> &'static str {
    match kind {
        "img" => "img",
        "video" => "vid",
        "audio" => "aud",
        _ => "att",
    }
}

/// One-line description of an attachment, e.g. `img cat.png (2.0KB)`.
pub fn attachment_line(attachment: &Attachment) -> String {
    let name = attachment
        .file_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(if attachment.kind.is_empty() {
            "attachment"
        } else {
            attachment.kind.as_str()
        });
    let size = attachment
        .file_size
        .map(|s| format!(" ({})", format_size(s)))
        .unwrap_or_default();
    format!("{} {name}{size}", attachment_icon(&attachment.kind))
}

/// Show only the start and end of a secret: `abcdefgh...wxyz`.
///
/// Secrets too short to mask that way are hidden entirely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len().max(4));
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Render `ts` in the local timezone.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Wrap each case-insensitive occurrence of `query` using `paint`.
pub fn highlight_with(text: &str, query: &str, paint: impl Fn(&str) -> String) -> String {
    if query.is_empty() {
        return text.to_string();
    }
    let Ok(re) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| paint(&caps[0]))
        .into_owned()
}

/// Highlight `query` in `text` with the warning color.
pub fn highlight_query(text: &str, query: &str) -> String {
    highlight_with(text, query, colors::warn)
}

/// Indent every line after the first so multi-line text stays aligned.
pub fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{indent}"))
}

/// Lines describing one message in a numbered list.
///
/// `network` labels the account; `query` is highlighted in the text.
pub fn message_lines(
    msg: &Message,
    index: usize,
    network: &str,
    query: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {} {}",
        colors::dim(&format!("{}.", index + 1)),
        colors::accent(msg.sender()),
        colors::dim(&format!("[{network}]")),
        colors::dim(&format!("• {}", format_timestamp(&msg.timestamp))),
    )];

    let text = match msg.text.as_deref().filter(|t| !t.is_empty()) {
        Some(text) => {
            let text = indent_continuation(text, "   ");
            match query {
                Some(q) => highlight_query(&text, q),
                None => text,
            }
        }
        None => colors::dim("[no text]"),
    };
    lines.push(format!("   {text}"));

    for attachment in &msg.attachments {
        lines.push(colors::dim(&format!("   {}", attachment_line(attachment))));
    }
    if !msg.reactions.is_empty() {
        let reactions: Vec<&str> = msg
            .reactions
            .iter()
            .map(|r| r.reaction_key.as_str())
            .collect();
        lines.push(colors::dim(&format!("   {}", reactions.join(" "))));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
