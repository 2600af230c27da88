// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! beepctl - read and send messages through Beeper Desktop from the terminal.
//!
//! The desktop app exposes an HTTP API on localhost. This crate wraps it in a
//! CLI: [`Cli`] parses arguments, [`run`] loads the configuration, builds one
//! [`api::BeeperClient`] and hands it to the command.
//!
//! # Main Components
//!
//! - [`api`] - Blocking HTTP client behind a [`api::Transport`] seam
//! - [`config`] - `config.json` with environment overrides
//! - [`Error`] - Error types for all operations
//!
//! Date parsing, alias resolution and search filters live in `beep_core`.

pub mod api;
mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
mod env;
pub mod error;
pub mod help;
mod logging;

pub use cli::{
    AliasCommand, AuthCommand, Cli, Command, ContactsCommand, DateRangeArgs, LimitArgs,
    RemindersCommand, SearchArgs,
};
pub use error::{Error, Result};

use std::io::Write;
use std::path::Path;

use beep_core::{ClockSource, SystemClock};
use clap::CommandFactory;
use clap_complete::generate;

use api::{BeeperClient, Transport};
use commands::focus::FocusArgs;
use config::{Config, Settings};

/// Execute a parsed command line against the real config and API.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let dir = config::config_dir()?;
    config::migrate_once(&dir);
    let settings = Settings::from_env(Config::load_from(&dir)?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(
        cli.command,
        &dir,
        &settings,
        || BeeperClient::connect(&settings),
        &SystemClock,
        &mut out,
    )
}

/// Route `command` to its handler.
///
/// `connect` is only called by commands that talk to the API, so setup
/// commands work without a running desktop app.
pub fn execute<T, F, C>(
    command: Command,
    dir: &Path,
    settings: &Settings,
    connect: F,
    clock: &C,
    out: &mut impl Write,
) -> Result<()>
where
    T: Transport,
    F: FnOnce() -> Result<BeeperClient<T>>,
    C: ClockSource,
{
    let aliases = &settings.aliases;
    match command {
        Command::Accounts => commands::accounts::run(&connect()?, out),
        Command::Chats { limit, search } => {
            commands::chats::run(&connect()?, limit.limit, search.as_deref(), out)
        }
        Command::Messages { chat, limit, dates } => commands::messages::run(
            &connect()?,
            aliases,
            &chat,
            limit.limit,
            &dates,
            clock,
            out,
        ),
        Command::Search(args) => commands::search::run(&connect()?, aliases, &args, clock, out),
        Command::Contacts(ContactsCommand::Search { account, query }) => {
            commands::contacts::search(&connect()?, &account, &query, out)
        }
        Command::Send {
            chat,
            message,
            dry_run,
        } => {
            if dry_run {
                commands::send::dry_run(aliases, &chat, &message, out)
            } else {
                commands::send::run(&connect()?, aliases, &chat, &message, out)
            }
        }
        Command::Archive {
            chat,
            unarchive,
            quiet,
        } => commands::archive::run(&connect()?, aliases, &chat, unarchive, quiet, out),
        Command::Reminders(RemindersCommand::Set {
            chat,
            time,
            dismiss_on_message,
        }) => commands::reminders::set(
            &connect()?,
            aliases,
            &chat,
            &time,
            dismiss_on_message,
            clock,
            out,
        ),
        Command::Reminders(RemindersCommand::Clear { chat }) => {
            commands::reminders::clear(&connect()?, aliases, &chat, out)
        }
        Command::Download { url, output } => {
            commands::download::run(&connect()?, &url, output.as_deref(), out)
        }
        Command::Focus {
            chat,
            message,
            draft,
            attachment,
        } => {
            let args = FocusArgs {
                chat: chat.as_deref(),
                message: message.as_deref(),
                draft: draft.as_deref(),
                attachment: attachment.as_deref().map(Path::new),
            };
            commands::focus::run(&connect()?, aliases, &args, out)
        }
        Command::Auth(AuthCommand::Set { token }) => commands::auth::set(dir, &token, out),
        Command::Auth(AuthCommand::Show) => commands::auth::show(settings, dir, out),
        Command::Auth(AuthCommand::Clear) => commands::auth::clear(dir, out),
        Command::Alias { command } => match command.unwrap_or(AliasCommand::List) {
            AliasCommand::List => commands::alias::list(aliases, out),
            AliasCommand::Add { name, chat_id } => commands::alias::add(dir, &name, &chat_id, out),
            AliasCommand::Remove { name } => commands::alias::remove(dir, &name, out),
            AliasCommand::Show { name } => commands::alias::show(aliases, &name, out),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "beepctl", out);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
