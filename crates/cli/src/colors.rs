// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and command output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers and accents: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary details, hints: medium grey
    pub const CONTEXT: u8 = 245;
    /// Failures
    pub const ERROR: u8 = 167;
    /// Confirmations
    pub const SUCCESS: u8 = 114;
    /// Warnings and search hits
    pub const WARN: u8 = 179;
}

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

const BOLD: &str = "\x1b[1m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wrap `text` in `code` when `enabled`.
fn paint(enabled: bool, code: u8, text: &str) -> String {
    if enabled {
        format!("{}{text}{RESET}", fg256(code))
    } else {
        text.to_string()
    }
}

// Help text. Clap decides separately whether help is styled, so these
// always emit escapes.

/// Section title color.
pub fn header(text: &str) -> String {
    paint(true, codes::HEADER, text)
}

/// Command/option color.
pub fn literal(text: &str) -> String {
    paint(true, codes::LITERAL, text)
}

/// Placeholder/quoted-value color.
pub fn context(text: &str) -> String {
    paint(true, codes::CONTEXT, text)
}

// Command output. Plain text unless colors are enabled.

pub fn error(text: &str) -> String {
    paint(should_colorize(), codes::ERROR, text)
}

pub fn success(text: &str) -> String {
    paint(should_colorize(), codes::SUCCESS, text)
}

pub fn warn(text: &str) -> String {
    paint(should_colorize(), codes::WARN, text)
}

pub fn accent(text: &str) -> String {
    paint(should_colorize(), codes::HEADER, text)
}

pub fn dim(text: &str) -> String {
    paint(should_colorize(), codes::CONTEXT, text)
}

pub fn bold(text: &str) -> String {
    if should_colorize() {
        format!("{BOLD}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   beepctl alias add work "!abc:beeper.local"   Save an alias
/// ```
///
/// Lines ending in `:` become headers. In example lines, the command (up to
/// the first run of 2+ spaces) is colorized and the description left plain.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command: quoted strings and `<placeholders>` as context,
/// everything else as literal. Spacing is preserved.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while !rest.is_empty() {
        let closing = match rest.chars().next() {
            Some('"') => Some('"'),
            Some('<') => Some('>'),
            _ => None,
        };

        if let Some(close) = closing {
            // Include the closing delimiter; an unclosed span runs to the end.
            let end = rest[1..]
                .find(close)
                .map(|i| i + 2)
                .unwrap_or(rest.len());
            out.push_str(&context(&rest[..end]));
            rest = &rest[end..];
            continue;
        }

        let end = rest.find([' ', '"', '<']).unwrap_or(rest.len());
        if end == 0 {
            // A lone space.
            out.push(' ');
            rest = &rest[1..];
        } else {
            out.push_str(&literal(&rest[..end]));
            rest = &rest[end..];
        }
    }

    out
}

/// Byte offset where the description starts: the first run of 2+ spaces
/// that is followed by more text.
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut run_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        match (b == b' ', run_start) {
            (true, None) => run_start = Some(i),
            (true, Some(_)) => {}
            (false, Some(start)) if i - start >= 2 => return Some(start),
            (false, Some(_)) => run_start = None,
            (false, None) => {}
        }
    }

    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
