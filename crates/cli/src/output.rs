// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use durfmt_core::{DurationFormat, TimeUnit};
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One formatted input amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub amount: i64,
    pub unit: TimeUnit,
    pub nanos: i64,
    pub formatted: String,
    pub zero: bool,
}

impl Report {
    pub fn new(fmt: &DurationFormat, amount: i64, unit: TimeUnit) -> Self {
        let nanos = unit.to_nanos(amount);
        Self {
            amount,
            unit,
            nanos,
            formatted: fmt.format(nanos),
            zero: fmt.is_displayed_as_zero(nanos),
        }
    }
}

/// Render reports for stdout.
///
/// Text output has one line per report: the formatted duration, or
/// `true`/`false` when `zero_only` is set. JSON output is the full records.
pub fn render(
    reports: &[Report],
    format: OutputFormat,
    zero_only: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for report in reports {
                if zero_only {
                    out.push_str(if report.zero { "true" } else { "false" });
                } else {
                    out.push_str(&report.formatted);
                }
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(reports)?;
            out.push('\n');
            Ok(out)
        }
    }
}
