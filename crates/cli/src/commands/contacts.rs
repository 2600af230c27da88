// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::api::{BeeperClient, Transport, User};
use crate::colors;
use crate::display::separator;
use crate::error::{Error, Result};

pub fn search<T: Transport>(
    client: &BeeperClient<T>,
    account: &str,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "query" });
    }
    let contacts = client.search_contacts(account, query)?;

    if contacts.is_empty() {
        writeln!(out, "No contacts found for \"{query}\"")?;
        return Ok(());
    }

    writeln!(out, "{}", colors::bold(&format!("Contacts ({})", contacts.len())))?;
    writeln!(out, "{}", separator())?;
    for contact in &contacts {
        write_contact(contact, out)?;
    }
    Ok(())
}

fn write_contact(contact: &User, out: &mut impl Write) -> Result<()> {
    let mut title = colors::bold(contact.name().unwrap_or("Unknown"));
    if contact.is_self {
        title.push_str(&colors::dim(" (you)"));
    }
    if contact.cannot_message {
        title.push_str(&colors::warn(" [cannot message]"));
    }
    writeln!(out, "{title}")?;
    writeln!(out, "  ID: {}", colors::dim(&contact.id))?;
    if let Some(username) = contact.username.as_deref().filter(|u| !u.is_empty()) {
        writeln!(out, "  @{username}")?;
    }
    if let Some(phone) = contact.phone_number.as_deref() {
        writeln!(out, "  Phone: {phone}")?;
    }
    if let Some(email) = contact.email.as_deref() {
        writeln!(out, "  Email: {email}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
