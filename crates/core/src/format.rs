// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting durations with user-defined format strings.
//!
//! See [`crate::template`] for the format-string syntax.

use std::time::Duration;

use crate::template::Template;

/// Format used when the caller does not supply one.
pub const DEFAULT_FORMAT: &str = "hh:mm:ss";

/// Format `duration_ms` according to `format`.
///
/// The format string is compiled fresh on every call. An empty format
/// yields an empty string.
///
/// ```
/// use duratiform_core::format;
///
/// assert_eq!(format(10 * 86_400_000 + 52 * 60_000 + 9_000, "hh:mm:ss"), "240:52:09");
/// assert_eq!(format(7_000, "[seconds]: s"), "seconds: 7");
/// ```
pub fn format(duration_ms: i64, format: &str) -> String {
    Template::compile(format).render(duration_ms)
}

/// Format `duration_ms` as `hh:mm:ss`.
pub fn format_default(duration_ms: i64) -> String {
    format(duration_ms, DEFAULT_FORMAT)
}

/// Format with an optional format string, falling back to [`DEFAULT_FORMAT`].
pub fn format_opt(duration_ms: i64, format_str: Option<&str>) -> String {
    format(duration_ms, format_str.unwrap_or(DEFAULT_FORMAT))
}

/// Format a [`Duration`]. Durations beyond `i64::MAX` milliseconds saturate.
pub fn format_duration(duration: Duration, format_str: &str) -> String {
    let ms = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
    format(ms, format_str)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
