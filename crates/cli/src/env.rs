// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Read a variable, treating an empty value as unset.
fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Returns the value of `BEEPER_TOKEN` if set.
pub fn token() -> Option<String> {
    non_empty(vars::BEEPER_TOKEN)
}

/// Returns the value of `BEEPER_URL` if set.
pub fn base_url() -> Option<String> {
    non_empty(vars::BEEPER_URL)
}

/// Returns the value of `BEEPCTL_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    non_empty(vars::BEEPCTL_CONFIG_DIR).map(PathBuf::from)
}

/// Returns the value of `BEEPCTL_LOG` if set (an `EnvFilter` directive).
pub fn log_filter() -> Option<String> {
    non_empty(vars::BEEPCTL_LOG)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
