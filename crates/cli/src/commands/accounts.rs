// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::api::{BeeperClient, Transport};
use crate::colors;
use crate::error::Result;

pub fn run<T: Transport>(client: &BeeperClient<T>, out: &mut impl Write) -> Result<()> {
    let accounts = client.list_accounts()?;

    if accounts.is_empty() {
        writeln!(out, "{}", colors::warn("No accounts connected."))?;
        writeln!(
            out,
            "{}",
            colors::dim("Connect an account in Beeper Desktop first.")
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{}\n",
        colors::bold(&format!("Connected Accounts ({})", accounts.len()))
    )?;
    for account in &accounts {
        writeln!(
            out,
            "  {} {}",
            colors::accent(&account.network),
            colors::bold(account.display_name())
        )?;
        writeln!(out, "{}", colors::dim(&format!("    ID: {}", account.account_id)))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
