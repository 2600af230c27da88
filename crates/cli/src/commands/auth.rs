// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::colors;
use crate::config::{config_path, Config, Settings, Source};
use crate::display::mask_token;
use crate::error::Result;

/// Save `token` to the config file in `dir`, keeping everything else.
pub fn set(dir: &Path, token: &str, out: &mut impl Write) -> Result<()> {
    let mut config = Config::load_from(dir)?;
    config.token = Some(token.trim().to_string());
    config.save_to(dir)?;
    info!("token saved");

    writeln!(out, "{}", colors::success("Token saved"))?;
    writeln!(out, "{}", colors::dim(&format!("   Config: {}", config_path(dir).display())))?;
    Ok(())
}

/// Print the effective token and API URL and where each comes from.
pub fn show(settings: &Settings, dir: &Path, out: &mut impl Write) -> Result<()> {
    let token = match settings.token.as_deref() {
        Some(token) => format!(
            "{} {}",
            mask_token(token),
            colors::dim(&format!("({})", settings.token_source))
        ),
        None => colors::warn("not set"),
    };
    writeln!(out, "Token:   {token}")?;
    writeln!(
        out,
        "API URL: {} {}",
        settings.base_url,
        colors::dim(&format!("({})", settings.base_url_source))
    )?;
    writeln!(out, "Config:  {}", config_path(dir).display())?;

    if settings.token_source == Source::Unset {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            colors::dim("Get a token from Beeper Desktop (Settings > Developers), then run:")
        )?;
        writeln!(out, "  beepctl auth set <token>")?;
    }
    Ok(())
}

/// Reset the config file, aliases included.
pub fn clear(dir: &Path, out: &mut impl Write) -> Result<()> {
    Config::default().save_to(dir)?;
    info!("config cleared");
    writeln!(out, "{}", colors::success("Configuration cleared"))?;
    Ok(())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
