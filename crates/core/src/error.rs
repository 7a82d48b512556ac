// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for parsing user-supplied settings.
//!
//! Decomposing and formatting never fail; these errors only come from the
//! strict conversions used when reading granularity from user input.

use thiserror::Error;

/// Errors from strict [`Granularity`](crate::Granularity) parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GranularityError {
    #[error("invalid part count {0}: expected 1, 2, 3 or 4")]
    InvalidPartCount(u8),
    #[error("unknown granularity '{0}': expected 1-4 or seconds, minutes, hours, days")]
    Unknown(String),
}
