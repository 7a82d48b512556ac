// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a millisecond duration into day/hour/minute/second counts.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::unit::{Granularity, Unit};

/// One unit of a [`Breakdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub unit: Unit,
    pub value: u64,
    /// Zero-padded rendering, at least two characters. Only present when
    /// strings were requested.
    pub padded: Option<String>,
}

/// Unit counts for one duration, coarsest first.
///
/// Every unit implied by the granularity is present. The coarsest unit is
/// unbounded (at `Hours` the hour count keeps growing past 23); every finer
/// unit holds the remainder left after the coarser ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    granularity: Granularity,
    parts: Vec<Part>,
}

impl Breakdown {
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    fn part(&self, unit: Unit) -> Option<&Part> {
        self.parts.iter().find(|p| p.unit == unit)
    }

    /// Count for `unit`, or `None` when the unit is above the granularity.
    pub fn get(&self, unit: Unit) -> Option<u64> {
        self.part(unit).map(|p| p.value)
    }

    /// Zero-padded rendering for `unit`, when strings were requested.
    pub fn padded(&self, unit: Unit) -> Option<&str> {
        self.part(unit).and_then(|p| p.padded.as_deref())
    }

    /// Whole seconds covered by the breakdown.
    pub fn total_seconds(&self) -> u64 {
        self.parts
            .iter()
            .map(|p| p.value.saturating_mul(p.unit.seconds()))
            .fold(0, u64::saturating_add)
    }
}

/// Serializes as a flat map: `{"hour": 9, "hour2": "09", "minute": 28, ...}`.
impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let strings = self.parts.iter().filter(|p| p.padded.is_some()).count();
        let mut map = serializer.serialize_map(Some(self.parts.len() + strings))?;
        for part in &self.parts {
            map.serialize_entry(part.unit.name(), &part.value)?;
            if let Some(padded) = &part.padded {
                map.serialize_entry(part.unit.padded_key(), padded)?;
            }
        }
        map.end()
    }
}

/// Zero-pad a count to at least two digits (`7` → `"07"`, `358` → `"358"`).
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Split `duration_ms` into the units exposed by `granularity`.
///
/// Milliseconds are truncated to whole seconds before anything else, so
/// `1500` and `1999` both give one second. Units are then taken coarsest
/// first: a unit gets `remaining / size` only when `remaining >= size`,
/// otherwise zero.
///
/// Negative durations never satisfy `remaining >= size`, so every unit is
/// zero.
pub fn decompose(duration_ms: i64, granularity: Granularity, with_strings: bool) -> Breakdown {
    let mut remaining = u64::try_from(duration_ms / 1000).unwrap_or(0);
    let mut parts = Vec::with_capacity(granularity.part_count() as usize);

    for unit in granularity.units() {
        let size = unit.seconds();
        let value = if remaining >= size {
            let value = remaining / size;
            remaining %= size;
            value
        } else {
            0
        };
        parts.push(Part {
            unit,
            value,
            padded: with_strings.then(|| pad2(value)),
        });
    }

    Breakdown { granularity, parts }
}

/// [`decompose`] with a raw part count; `0` means the default (3) and
/// counts above 4 are treated as 4.
pub fn decompose_parts(duration_ms: i64, part_count: u8, with_strings: bool) -> Breakdown {
    decompose(
        duration_ms,
        Granularity::from_part_count(part_count),
        with_strings,
    )
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
