// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time units and their fixed conversion tables.
//!
//! Units are ordered finest to coarsest. The tables below are indexed by
//! [`TimeUnit::index`] and never change at runtime.

use crate::error::ParseUnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;

const NANOS: [i64; 7] = [
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    60 * 1_000_000_000,
    60 * 60 * 1_000_000_000,
    24 * 60 * 60 * 1_000_000_000,
];

/// Factor between each unit and the next coarser one. Days have none.
const FACTORS: [i64; 6] = [1000, 1000, 1000, 60, 60, 24];

const SUFFIXES: [&str; 7] = ["ns", "μs", "ms", "s", "m", "h", "d"];

const NAMES: [&str; 7] = [
    "nanoseconds",
    "microseconds",
    "milliseconds",
    "seconds",
    "minutes",
    "hours",
    "days",
];

/// A unit a duration field can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// Position of this unit in [`TimeUnit::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit at `index` in [`TimeUnit::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Nanoseconds in one of this unit.
    pub const fn nanos(self) -> i64 {
        NANOS[self.index()]
    }

    /// How many of this unit make up one of the next coarser unit.
    pub fn factor_to_coarser(self) -> Option<i64> {
        FACTORS.get(self.index()).copied()
    }

    /// Short suffix used in formatted output, e.g. `"ms"`.
    pub const fn suffix(self) -> &'static str {
        SUFFIXES[self.index()]
    }

    /// Lowercase plural name, e.g. `"milliseconds"`.
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Convert `amount` of this unit to nanoseconds, saturating on overflow.
    pub const fn to_nanos(self, amount: i64) -> i64 {
        amount.saturating_mul(self.nanos())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_lowercase().as_str() {
            "ns" | "nanos" | "nanosecond" | "nanoseconds" => TimeUnit::Nanoseconds,
            "us" | "μs" | "µs" | "micros" | "microsecond" | "microseconds" => {
                TimeUnit::Microseconds
            }
            "ms" | "millis" | "millisecond" | "milliseconds" => TimeUnit::Milliseconds,
            "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Seconds,
            "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minutes,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hours,
            "d" | "day" | "days" => TimeUnit::Days,
            _ => {
                return Err(ParseUnitError {
                    input: s.to_string(),
                })
            }
        };
        Ok(unit)
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = ParseUnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeUnit> for &'static str {
    fn from(unit: TimeUnit) -> Self {
        unit.name()
    }
}
