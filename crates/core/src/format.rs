// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration formatting.
//!
//! A formatted duration is a run of unit fields such as `"93 m 6 s 486 ms"`.
//! The first field is the primary unit, picked from the input's magnitude
//! unless configured. The last field is limited by the level count and the
//! optional lowest unit. The value at the last field is rounded half up, and
//! every coarser field comes from exact integer decomposition of that value.

use crate::error::FormatError;
use crate::unit::TimeUnit;
use std::fmt;
use std::time::Duration;

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

/// Exclusive upper bounds (in nanoseconds) for auto-selecting the primary unit.
///
/// Seconds, minutes and hours keep up to 100 before rolling over.
const AUTO_UNIT_LIMITS: [(i64, TimeUnit); 6] = [
    (10 * TimeUnit::Microseconds.nanos(), TimeUnit::Nanoseconds),
    (10 * TimeUnit::Milliseconds.nanos(), TimeUnit::Microseconds),
    (10 * TimeUnit::Seconds.nanos(), TimeUnit::Milliseconds),
    (100 * TimeUnit::Seconds.nanos(), TimeUnit::Seconds),
    (100 * TimeUnit::Minutes.nanos(), TimeUnit::Minutes),
    (100 * TimeUnit::Hours.nanos(), TimeUnit::Hours),
];

fn auto_unit(nanos: i64) -> TimeUnit {
    AUTO_UNIT_LIMITS
        .iter()
        .find(|(limit, _)| nanos < *limit)
        .map_or(TimeUnit::Days, |(_, unit)| *unit)
}

/// Value of `nanos` in `unit`, rounded half up.
fn rounded_value(nanos: i64, unit: TimeUnit) -> i64 {
    let per_unit = unit.nanos();
    let value = nanos / per_unit;
    if per_unit > 1 && nanos - value * per_unit >= per_unit / 2 {
        value + 1
    } else {
        value
    }
}

/// Formats durations as compact unit fields, e.g. `"13 s 499 μs"`.
///
/// By default only the primary unit is shown and zero fields are dropped.
/// Configure with the `with_*` methods:
///
/// ```
/// use durfmt_core::{DurationFormat, TimeUnit};
///
/// let fmt = DurationFormat::new()
///     .with_drop_inner_zeroes(false)
///     .with_primary_unit(Some(TimeUnit::Milliseconds))
///     .with_levels(3)
///     .unwrap();
/// assert_eq!(fmt.format(1_500_000_000), "1500 ms 0 μs 0 ns");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationFormat {
    primary_unit: Option<TimeUnit>,
    lowest_unit: Option<TimeUnit>,
    levels: u32,
    drop_leading_zeroes: bool,
    drop_inner_zeroes: bool,
}

impl Default for DurationFormat {
    fn default() -> Self {
        Self {
            primary_unit: None,
            lowest_unit: None,
            levels: 1,
            drop_leading_zeroes: true,
            drop_inner_zeroes: true,
        }
    }
}

impl DurationFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop zero fields that follow the first non-zero field (default `true`).
    pub fn with_drop_inner_zeroes(mut self, drop: bool) -> Self {
        self.drop_inner_zeroes = drop;
        self
    }

    /// Drop zero fields before the first non-zero field (default `true`).
    ///
    /// The last field is still shown when every field is zero.
    pub fn with_drop_leading_zeroes(mut self, drop: bool) -> Self {
        self.drop_leading_zeroes = drop;
        self
    }

    /// Fix the primary (first) unit, or `None` to pick it per input.
    pub fn with_primary_unit(mut self, unit: Option<TimeUnit>) -> Self {
        self.primary_unit = unit;
        self
    }

    /// Set the finest unit that may be displayed, or `None` for no floor.
    pub fn with_lowest_unit(mut self, unit: Option<TimeUnit>) -> Self {
        self.lowest_unit = unit;
        self
    }

    /// Set the maximum number of consecutive unit fields.
    ///
    /// With seconds as the primary unit, 2300 ms is `"2 s 300 ms"` at level 2
    /// and `"2 s"` at level 1.
    pub fn with_levels(mut self, levels: u32) -> Result<Self, FormatError> {
        if levels == 0 {
            return Err(FormatError::InvalidLevelCount(levels));
        }
        self.levels = levels;
        Ok(self)
    }

    pub fn primary_unit(&self) -> Option<TimeUnit> {
        self.primary_unit
    }

    pub fn lowest_unit(&self) -> Option<TimeUnit> {
        self.lowest_unit
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn drop_leading_zeroes(&self) -> bool {
        self.drop_leading_zeroes
    }

    pub fn drop_inner_zeroes(&self) -> bool {
        self.drop_inner_zeroes
    }

    /// Format a duration given in nanoseconds.
    pub fn format(&self, nanos: i64) -> String {
        self.display(nanos).to_string()
    }

    /// Format `amount` of `unit`.
    pub fn format_in(&self, amount: i64, unit: TimeUnit) -> String {
        self.format(unit.to_nanos(amount))
    }

    /// Format a [`Duration`], saturating at `i64::MAX` nanoseconds.
    pub fn format_duration(&self, duration: Duration) -> String {
        self.format(duration_nanos(duration))
    }

    /// Lazily formatted duration, for writing into an existing buffer.
    pub fn display(&self, nanos: i64) -> FormattedDuration {
        FormattedDuration {
            fields: self.fields(nanos),
            drop_leading_zeroes: self.drop_leading_zeroes,
            drop_inner_zeroes: self.drop_inner_zeroes,
        }
    }

    /// Per-unit values that `format` would render for `nanos`.
    pub fn fields(&self, nanos: i64) -> Fields {
        let (main, last) = self.unit_range(nanos);
        Fields::decompose(rounded_value(nanos, last), main, last)
    }

    /// True if every displayed field would be zero.
    pub fn is_displayed_as_zero(&self, nanos: i64) -> bool {
        let (_, last) = self.unit_range(nanos);
        rounded_value(nanos, last) == 0
    }

    /// [`is_displayed_as_zero`](Self::is_displayed_as_zero) for `amount` of `unit`.
    pub fn is_displayed_as_zero_in(&self, amount: i64, unit: TimeUnit) -> bool {
        self.is_displayed_as_zero(unit.to_nanos(amount))
    }

    /// [`is_displayed_as_zero`](Self::is_displayed_as_zero) for a [`Duration`].
    pub fn is_duration_displayed_as_zero(&self, duration: Duration) -> bool {
        self.is_displayed_as_zero(duration_nanos(duration))
    }

    /// Primary and lowest displayed units for `nanos`.
    fn unit_range(&self, nanos: i64) -> (TimeUnit, TimeUnit) {
        let mut main = self
            .primary_unit
            .unwrap_or_else(|| auto_unit(nanos))
            .index();
        let extra_levels = (self.levels as usize).saturating_sub(1);
        let mut last = main.saturating_sub(extra_levels);

        if let Some(lowest) = self.lowest_unit {
            let floor = lowest.index();
            if self.primary_unit.is_none() && main < floor {
                // Too small to reach the floor; collapse to a single field there
                main = floor;
                last = floor;
            } else {
                last = last.max(floor.min(main));
            }
        }

        debug_assert!(
            last <= main,
            "unit range inverted: nanos={nanos}, main={main}, last={last}"
        );
        (TimeUnit::ALL[main], TimeUnit::ALL[last])
    }
}

fn duration_nanos(duration: Duration) -> i64 {
    i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX)
}

/// Decomposed field values between the primary and lowest displayed units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    values: [i64; 7],
    main: TimeUnit,
    last: TimeUnit,
    rounded: i64,
}

impl Fields {
    fn decompose(rounded: i64, main: TimeUnit, last: TimeUnit) -> Self {
        let mut values = [0; 7];
        values[last.index()] = rounded;
        for unit in &TimeUnit::ALL[last.index()..main.index()] {
            let Some(factor) = unit.factor_to_coarser() else {
                break;
            };
            let i = unit.index();
            values[i + 1] = values[i] / factor;
            values[i] %= factor;
        }
        Self {
            values,
            main,
            last,
            rounded,
        }
    }

    /// The primary (first) unit.
    pub fn main_unit(&self) -> TimeUnit {
        self.main
    }

    /// The lowest (last) unit.
    pub fn lowest_unit(&self) -> TimeUnit {
        self.last
    }

    /// Value of the field for `unit`, or `None` outside the displayed range.
    pub fn value(&self, unit: TimeUnit) -> Option<i64> {
        (self.last..=self.main)
            .contains(&unit)
            .then_some(self.values[unit.index()])
    }

    /// The whole duration expressed in the lowest unit, after rounding.
    pub fn total_in_lowest(&self) -> i64 {
        self.rounded
    }

    pub fn is_zero(&self) -> bool {
        self.rounded == 0
    }

    /// `(unit, value)` pairs, coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, i64)> + '_ {
        (self.last.index()..=self.main.index())
            .rev()
            .map(move |i| (TimeUnit::ALL[i], self.values[i]))
    }
}

/// A duration ready to be written with [`fmt::Display`].
///
/// Returned by [`DurationFormat::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedDuration {
    fields: Fields,
    drop_leading_zeroes: bool,
    drop_inner_zeroes: bool,
}

impl FormattedDuration {
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut has_non_zero = false;
        let mut separator = "";
        for (unit, value) in self.fields.iter() {
            let shown = value != 0
                || if has_non_zero {
                    !self.drop_inner_zeroes
                } else {
                    !self.drop_leading_zeroes || unit == self.fields.last
                };
            if shown {
                write!(f, "{}{} {}", separator, value, unit.suffix())?;
                separator = " ";
            }
            has_non_zero |= value != 0;
        }
        Ok(())
    }
}
