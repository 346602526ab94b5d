// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt - format durations as compact unit fields

mod env;
mod output;

use anyhow::Result;
use clap::Parser;
use durfmt_core::{FormatConfig, TimeUnit};
use output::{OutputFormat, Report};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "durfmt",
    version,
    about = "Format durations as compact unit fields, e.g. \"93 m 6 s 486 ms\""
)]
struct Cli {
    /// Durations to format, as non-negative amounts of --unit
    #[arg(required = true, value_parser = clap::value_parser!(i64).range(0..))]
    amounts: Vec<i64>,

    /// Unit of the input amounts
    #[arg(short, long, default_value = "ns")]
    unit: TimeUnit,

    /// Fixed leading unit (picked per amount when omitted)
    #[arg(short, long)]
    primary: Option<TimeUnit>,

    /// Finest unit to display
    #[arg(short, long)]
    lowest: Option<TimeUnit>,

    /// Maximum number of unit fields
    #[arg(short = 'n', long)]
    levels: Option<u32>,

    /// Show zero fields before the first non-zero field
    #[arg(long)]
    keep_leading_zeroes: bool,

    /// Show zero fields after the first non-zero field
    #[arg(long)]
    keep_inner_zeroes: bool,

    /// TOML file with format settings (default: $DURFMT_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print whether each duration is displayed as zero instead of the text
    #[arg(long)]
    zero: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    setup_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, skipping causes already present in the top-level message.
fn format_error(err: &anyhow::Error) -> String {
    let mut buf = err.to_string();
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !buf.contains(&cause) {
            buf.push_str(&format!("\n\nCaused by:\n    {}", cause));
        }
    }
    buf
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(env::config_path);
    let config = resolve_config(&cli, config_path.as_deref())?;
    tracing::debug!(?config, "resolved format settings");

    let fmt = config.build()?;
    let reports: Vec<Report> = cli
        .amounts
        .iter()
        .map(|&amount| Report::new(&fmt, amount, cli.unit))
        .collect();

    print!("{}", output::render(&reports, cli.output, cli.zero)?);
    Ok(())
}

/// Load settings from `config_path` (if any), then apply command-line overrides.
fn resolve_config(cli: &Cli, config_path: Option<&Path>) -> Result<FormatConfig> {
    let mut config = match config_path {
        Some(path) => FormatConfig::load(path)?,
        None => FormatConfig::default(),
    };

    if cli.primary.is_some() {
        config.primary_unit = cli.primary;
    }
    if cli.lowest.is_some() {
        config.lowest_unit = cli.lowest;
    }
    if let Some(levels) = cli.levels {
        config.levels = levels;
    }
    if cli.keep_leading_zeroes {
        config.drop_leading_zeroes = false;
    }
    if cli.keep_inner_zeroes {
        config.drop_inner_zeroes = false;
    }
    Ok(config)
}
