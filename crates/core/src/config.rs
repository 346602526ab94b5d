// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML description of a [`DurationFormat`].
//!
//! ```toml
//! primary_unit = "ms"
//! levels = 3
//! drop_inner_zeroes = false
//! ```

use crate::error::{ConfigError, FormatError};
use crate::format::DurationFormat;
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

fn default_levels() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Formatter settings as stored in a config file.
///
/// Missing keys take the [`DurationFormat`] defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_unit: Option<TimeUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_unit: Option<TimeUnit>,
    #[serde(default = "default_levels")]
    pub levels: u32,
    #[serde(default = "default_true")]
    pub drop_leading_zeroes: bool,
    #[serde(default = "default_true")]
    pub drop_inner_zeroes: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::from(&DurationFormat::default())
    }
}

impl FormatConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading format config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the formatter these settings describe.
    pub fn build(&self) -> Result<DurationFormat, FormatError> {
        Ok(DurationFormat::new()
            .with_levels(self.levels)?
            .with_primary_unit(self.primary_unit)
            .with_lowest_unit(self.lowest_unit)
            .with_drop_leading_zeroes(self.drop_leading_zeroes)
            .with_drop_inner_zeroes(self.drop_inner_zeroes))
    }
}

impl From<&DurationFormat> for FormatConfig {
    fn from(fmt: &DurationFormat) -> Self {
        Self {
            primary_unit: fmt.primary_unit(),
            lowest_unit: fmt.lowest_unit(),
            levels: fmt.levels(),
            drop_leading_zeroes: fmt.drop_leading_zeroes(),
            drop_inner_zeroes: fmt.drop_inner_zeroes(),
        }
    }
}
