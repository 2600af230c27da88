// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `BEEPCTL_LOG` (an `EnvFilter` directive). Without it
//! only warnings are shown, or debug output with `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Directive used when `BEEPCTL_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "beepctl=debug,beep_core=debug,warn"
    } else {
        "warn"
    }
}

/// Build the filter for this process.
pub fn filter(verbose: bool) -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
