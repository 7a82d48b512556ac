// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Format-string compilation.
//!
//! A format string is scanned once, left to right, into a [`Template`]: a
//! list of literal runs and unit placeholders. Scanning tracks two bits of
//! state: whether placeholders are active and whether the next character
//! is escaped.
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `\x` | literal `x`, for any character (top priority, also inside `[...]`) |
//! | `d` `h` `m` `s` | unit, at least one digit |
//! | `dd` `hh` `mm` `ss` | unit, zero-padded to at least two digits |
//! | `[` ... `]` | literal region: brackets dropped, unit letters inert |
//! | anything else | literal |
//!
//! Substitution is deferred: the granularity needed for the breakdown is
//! only known once the whole string has been scanned.

use std::fmt;

use serde::Serialize;

use crate::decompose::{decompose, pad2, Breakdown};
use crate::unit::{Granularity, Unit};

/// Rendering width of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Plain decimal, no padding (`d`, `h`, `m`, `s`).
    Single,
    /// Zero-padded to at least two characters (`dd`, `hh`, `mm`, `ss`).
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub unit: Unit,
    pub width: Width,
}

impl Placeholder {
    /// Render this placeholder from `breakdown`.
    ///
    /// Returns `None` when the unit is coarser than the breakdown's
    /// granularity. Values are never truncated: `hh` renders 358 hours as
    /// `"358"`. Double width pads the count itself when the breakdown was
    /// built without strings.
    pub fn resolve(&self, breakdown: &Breakdown) -> Option<String> {
        match self.width {
            Width::Single => breakdown.get(self.unit).map(|v| v.to_string()),
            Width::Double => match breakdown.padded(self.unit) {
                Some(padded) => Some(padded.to_string()),
                None => breakdown.get(self.unit).map(pad2),
            },
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.unit.letter();
        match self.width {
            Width::Single => write!(f, "{letter}"),
            Width::Double => write!(f, "{letter}{letter}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Unit letters and `[` are special.
    Normal,
    /// Inside `[...]`: only `]` and `\` are special.
    Literal,
}

/// A compiled format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    granularity: Option<Granularity>,
}

impl Template {
    /// Scan `format` into literal runs and placeholders.
    ///
    /// Never fails. An unterminated `[` keeps the rest of the string
    /// literal and a trailing lone `\` is dropped.
    pub fn compile(format: &str) -> Template {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut granularity = None;
        let mut mode = Mode::Normal;
        let mut escape_next = false;
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if escape_next {
                literal.push(c);
                escape_next = false;
                continue;
            }

            match mode {
                Mode::Normal => {
                    if let Some(unit) = Unit::from_letter(c) {
                        let width = match chars.next_if_eq(&c) {
                            Some(_) => Width::Double,
                            None => Width::Single,
                        };
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Placeholder(Placeholder { unit, width }));
                        granularity = granularity.max(Some(unit.granularity()));
                        continue;
                    }
                    if c == '[' {
                        mode = Mode::Literal;
                        continue;
                    }
                }
                Mode::Literal => {
                    if c == ']' {
                        mode = Mode::Normal;
                        continue;
                    }
                }
            }

            if c == '\\' {
                escape_next = true;
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if mode == Mode::Literal {
            tracing::debug!(format = %format, "literal region still open at end of format");
        }
        if escape_next {
            tracing::debug!(format = %format, "dropping trailing escape character");
        }

        Template {
            segments,
            granularity,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }

    /// Granularity needed to resolve every placeholder, or `None` when the
    /// template is pure literal text.
    pub fn granularity(&self) -> Option<Granularity> {
        self.granularity
    }

    pub fn is_literal(&self) -> bool {
        self.granularity.is_none()
    }

    /// Render the template for `duration_ms`.
    ///
    /// Pure literal templates are returned as-is without breaking the
    /// duration down. Otherwise the duration is decomposed once, at the
    /// coarsest unit any placeholder asks for.
    pub fn render(&self, duration_ms: i64) -> String {
        let Some(granularity) = self.granularity else {
            return self.literal_text();
        };
        let breakdown = decompose(duration_ms, granularity, true);

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => {
                    if let Some(value) = p.resolve(&breakdown) {
                        out.push_str(&value);
                    }
                }
            }
        }
        out
    }

    fn literal_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Literal(text) => Some(text.as_str()),
                Segment::Placeholder(_) => None,
            })
            .collect()
    }
}

/// Writes a canonical format string that compiles back to the same template.
///
/// Special literal characters are escaped with `\`. A single-width
/// placeholder followed by another placeholder of the same unit is split
/// with an empty `[]` so `h` + `hh` does not read back as `hh` + `h`.
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&Placeholder> = None;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    for c in text.chars() {
                        if c == '\\' || c == '[' || Unit::from_letter(c).is_some() {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                    prev = None;
                }
                Segment::Placeholder(p) => {
                    if let Some(prev) = prev {
                        if prev.width == Width::Single && prev.unit == p.unit {
                            f.write_str("[]")?;
                        }
                    }
                    write!(f, "{p}")?;
                    prev = Some(p);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
