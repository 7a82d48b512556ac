// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! duratiform-core: split millisecond durations into units and render them
//! through small format strings.
//!
//! ```
//! use duratiform_core::{decompose, format, Granularity, Unit};
//!
//! let ms = (9 * 3600 + 28 * 60 + 51) * 1000;
//! let parts = decompose(ms, Granularity::Hours, false);
//! assert_eq!(parts.get(Unit::Minute), Some(28));
//!
//! assert_eq!(format(13 * 3_600_000 + 8 * 60_000 + 5_000, "\\[\\dur: h:m:ss\\]"), "[dur: 13:8:05]");
//! ```

pub mod decompose;
pub mod error;
pub mod format;
pub mod template;
pub mod unit;

pub use decompose::{decompose, decompose_parts, Breakdown, Part};
pub use error::GranularityError;
pub use format::{format, format_default, format_duration, format_opt, DEFAULT_FORMAT};
pub use template::{Placeholder, Segment, Template, Width};
pub use unit::{Granularity, Unit};
