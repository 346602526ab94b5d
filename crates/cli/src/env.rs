// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

/// Config file used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("DURFMT_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Log filter directive: DURFMT_LOG, else `warn`.
pub fn log_filter() -> String {
    std::env::var("DURFMT_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "warn".to_string())
}
