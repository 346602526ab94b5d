// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt-core: compact human-readable duration formatting.
//!
//! ```
//! use durfmt_core::{DurationFormat, TimeUnit};
//!
//! let fmt = DurationFormat::new().with_levels(3).unwrap();
//! assert_eq!(fmt.format_in(13_000_499, TimeUnit::Microseconds), "13 s 499 μs");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod unit;

pub use config::FormatConfig;
pub use error::{ConfigError, FormatError, ParseUnitError};
pub use format::{DurationFormat, Fields, FormattedDuration};
pub use unit::TimeUnit;
