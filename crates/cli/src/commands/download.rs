// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use reqwest::Url;
use tracing::debug;

use crate::api::{BeeperClient, Transport};
use crate::colors;
use crate::error::{Error, Result};

/// Resolve an attachment URL (`mxc://...`) to a file the desktop app has
/// cached, optionally copying it to `output`.
pub fn run<T: Transport>(
    client: &BeeperClient<T>,
    url: &str,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let asset = client.download_asset(url)?;
    if let Some(error) = asset.error {
        return Err(Error::DownloadFailed(error));
    }
    let src = asset
        .src_url
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::DownloadFailed("no source URL returned".to_string()))?;
    let local = local_path(&src)?;
    debug!(src = %src, path = %local.display(), "asset resolved");

    match output {
        Some(dest) => {
            fs::copy(&local, dest)?;
            writeln!(out, "{}", colors::success("Downloaded successfully"))?;
            writeln!(out, "   Saved to: {}", dest.display())?;
        }
        None => {
            writeln!(out, "{}", colors::success("Asset available locally"))?;
            writeln!(out, "   Path: {}", local.display())?;
            if let Some(name) = local.file_name() {
                writeln!(out, "   File: {}", name.to_string_lossy())?;
            }
            writeln!(out, "{}", colors::dim("   Use -o <path> to copy it elsewhere"))?;
        }
    }
    Ok(())
}

/// The filesystem path behind a `file://` URL or a bare path.
pub fn local_path(src: &str) -> Result<PathBuf> {
    if !src.starts_with("file://") {
        return Ok(PathBuf::from(src));
    }
    Url::parse(src)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .ok_or_else(|| Error::DownloadFailed(format!("not a local file URL: {src}")))
}

#[cfg(test)]
#[path = "download_tests.rs"]
mod tests;
