// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `<config dir>/beepctl/config.json` and includes:
//! - `token`: The Beeper Desktop API token
//! - `baseUrl`: Where the Desktop API listens (default `http://localhost:23373`)
//! - `aliases`: Short names for chat IDs
//!
//! `BEEPER_TOKEN` and `BEEPER_URL` override the file's token and URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use beep_core::AliasTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::env;
use crate::error::{Error, Result};

/// Where Beeper Desktop serves its API by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:23373";

const APP_DIR_NAME: &str = "beepctl";
const LEGACY_DIR_NAME: &str = "beepcli";
const CONFIG_FILE_NAME: &str = "config.json";

static MIGRATION: Once = Once::new();

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "AliasTable::is_empty")]
    pub aliases: AliasTable,
}

/// Where an effective setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Env(&'static str),
    File,
    Default,
    Unset,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Env(var) => write!(f, "environment ({var})"),
            Source::File => write!(f, "config file"),
            Source::Default => write!(f, "default"),
            Source::Unset => write!(f, "not set"),
        }
    }
}

/// The config file with environment overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: Option<String>,
    pub token_source: Source,
    pub base_url: String,
    pub base_url_source: Source,
    pub aliases: AliasTable,
}

impl Settings {
    /// Layer environment values over the file so aliases stay available.
    pub fn resolve(config: Config, env_token: Option<String>, env_url: Option<String>) -> Self {
        let (token, token_source) = match (env_token, config.token) {
            (Some(t), _) => (Some(t), Source::Env(env::vars::BEEPER_TOKEN)),
            (None, Some(t)) if !t.is_empty() => (Some(t), Source::File),
            _ => (None, Source::Unset),
        };
        let (base_url, base_url_source) = match (env_url, config.base_url) {
            (Some(u), _) => (u, Source::Env(env::vars::BEEPER_URL)),
            (None, Some(u)) if !u.is_empty() => (u, Source::File),
            _ => (DEFAULT_BASE_URL.to_string(), Source::Default),
        };
        Settings {
            token,
            token_source,
            base_url,
            base_url_source,
            aliases: config.aliases,
        }
    }

    /// Apply the process environment to `config`.
    pub fn from_env(config: Config) -> Self {
        Self::resolve(config, env::token(), env::base_url())
    }
}

impl Config {
    /// Loads configuration from `dir`.
    ///
    /// A missing file is an empty config. A malformed file is logged and
    /// also treated as empty.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {e}"))),
        };
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("ignoring malformed config at {}: {e}", path.display());
                Ok(Config::default())
            }
        }
    }

    /// Saves configuration to `dir`, creating it if needed.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        debug!("saved config to {}", dir.display());
        Ok(())
    }
}

/// The beepctl config directory: `$BEEPCTL_CONFIG_DIR`, else
/// `<user config dir>/beepctl`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::config_dir() {
        return Ok(dir);
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or_else(|| Error::Config("could not determine the user config directory".to_string()))
}

/// Path of the config file inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// The legacy directory that sits next to `dir`.
pub fn legacy_dir(dir: &Path) -> PathBuf {
    dir.parent()
        .map(|p| p.join(LEGACY_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LEGACY_DIR_NAME))
}

/// Run [`migrate_legacy`] for `dir` at most once per process, reporting a
/// migration on stderr. Failures are logged and otherwise ignored.
pub fn migrate_once(dir: &Path) {
    MIGRATION.call_once(|| match migrate_legacy(dir) {
        Ok(true) => eprintln!(
            "Migrated config from {} to {}",
            legacy_dir(dir).display(),
            dir.display()
        ),
        Ok(false) => {}
        Err(e) => warn!("legacy config migration failed: {e}"),
    });
}

/// Move a legacy config into `dir` when `dir` has none yet.
///
/// Returns `true` if a config was migrated.
pub fn migrate_legacy(dir: &Path) -> Result<bool> {
    let target = config_path(dir);
    let legacy = legacy_dir(dir);
    let source = config_path(&legacy);
    if target.exists() || !source.is_file() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    fs::copy(&source, &target)?;
    fs::remove_dir_all(&legacy)?;
    Ok(true)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
