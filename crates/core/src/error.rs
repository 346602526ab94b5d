// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for formatter configuration.
//!
//! Formatting itself never fails; every error here surfaces while a
//! [`DurationFormat`](crate::DurationFormat) is being configured.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid formatter setting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid level count {0}: at least one unit level is required")]
    InvalidLevelCount(u32),
}

/// A time unit name that could not be recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit: {input}")]
pub struct ParseUnitError {
    pub input: String,
}

/// Errors from loading a formatter configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Format(#[from] FormatError),
}
