// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time units and breakdown granularity.
//!
//! A [`Granularity`] names the coarsest [`Unit`] a breakdown exposes. Every
//! granularity includes all finer units, so `Hours` covers hours, minutes
//! and seconds. There is nothing above `Days`: the coarsest unit present
//! absorbs all larger time.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GranularityError;

/// A single time unit, ordered coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

    /// Size of the unit in whole seconds.
    pub fn seconds(self) -> u64 {
        match self {
            Unit::Day => 86_400,
            Unit::Hour => 3_600,
            Unit::Minute => 60,
            Unit::Second => 1,
        }
    }

    /// Field name of the integer count (`"day"`, `"hour"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Field name of the zero-padded rendering (`"day2"`, `"hour2"`, ...).
    pub fn padded_key(self) -> &'static str {
        match self {
            Unit::Day => "day2",
            Unit::Hour => "hour2",
            Unit::Minute => "minute2",
            Unit::Second => "second2",
        }
    }

    /// Placeholder letter used in format strings.
    pub fn letter(self) -> char {
        match self {
            Unit::Day => 'd',
            Unit::Hour => 'h',
            Unit::Minute => 'm',
            Unit::Second => 's',
        }
    }

    pub fn from_letter(c: char) -> Option<Unit> {
        match c {
            'd' => Some(Unit::Day),
            'h' => Some(Unit::Hour),
            'm' => Some(Unit::Minute),
            's' => Some(Unit::Second),
            _ => None,
        }
    }

    /// The smallest granularity that still exposes this unit.
    pub fn granularity(self) -> Granularity {
        match self {
            Unit::Day => Granularity::Days,
            Unit::Hour => Granularity::Hours,
            Unit::Minute => Granularity::Minutes,
            Unit::Second => Granularity::Seconds,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many units a breakdown exposes, named by its coarsest unit.
///
/// Ordering follows the part count, so `Seconds < Minutes < Hours < Days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Seconds = 1,
    Minutes = 2,
    #[default]
    Hours = 3,
    Days = 4,
}

impl Granularity {
    /// Lenient conversion from a part count.
    ///
    /// `0` falls back to the default (`Hours`) and anything above 4 is
    /// treated as `Days`.
    pub fn from_part_count(count: u8) -> Self {
        match count {
            0 => Granularity::default(),
            1 => Granularity::Seconds,
            2 => Granularity::Minutes,
            3 => Granularity::Hours,
            _ => Granularity::Days,
        }
    }

    /// Number of units exposed (1-4).
    pub fn part_count(self) -> u8 {
        self as u8
    }

    pub fn coarsest(self) -> Unit {
        match self {
            Granularity::Seconds => Unit::Second,
            Granularity::Minutes => Unit::Minute,
            Granularity::Hours => Unit::Hour,
            Granularity::Days => Unit::Day,
        }
    }

    pub fn includes(self, unit: Unit) -> bool {
        unit.granularity() <= self
    }

    /// Units exposed at this granularity, coarsest first.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |u| self.includes(*u))
    }

    fn plural(self) -> &'static str {
        match self {
            Granularity::Seconds => "seconds",
            Granularity::Minutes => "minutes",
            Granularity::Hours => "hours",
            Granularity::Days => "days",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl TryFrom<u8> for Granularity {
    type Error = GranularityError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1..=4 => Ok(Granularity::from_part_count(count)),
            _ => Err(GranularityError::InvalidPartCount(count)),
        }
    }
}

impl FromStr for Granularity {
    type Err = GranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(count) = trimmed.parse::<u8>() {
            return Granularity::try_from(count);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "second" | "seconds" => Ok(Granularity::Seconds),
            "minute" | "minutes" => Ok(Granularity::Minutes),
            "hour" | "hours" => Ok(Granularity::Hours),
            "day" | "days" => Ok(Granularity::Days),
            _ => Err(GranularityError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
