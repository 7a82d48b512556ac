// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `duratiform split` - break a duration into unit counts

use anyhow::Result;
use clap::Args;
use duratiform_core::{decompose, Breakdown, Granularity};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct SplitArgs {
    /// Duration in milliseconds
    #[arg(value_name = "MILLIS", allow_negative_numbers = true)]
    pub millis: i64,

    /// Units to include: 1-4, or seconds, minutes, hours, days
    #[arg(short, long, value_name = "N", default_value_t)]
    pub parts: Granularity,

    /// Include zero-padded renderings of each unit
    #[arg(long)]
    pub strings: bool,
}

/// One `unit: value` line per part, with the padded form in parentheses.
pub fn format_breakdown_text(breakdown: &Breakdown) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    for part in breakdown.parts() {
        let _ = match &part.padded {
            Some(padded) => writeln!(out, "{}: {} ({})", part.unit, part.value, padded),
            None => writeln!(out, "{}: {}", part.unit, part.value),
        };
    }
    out
}

pub fn handle(args: SplitArgs, format: OutputFormat) -> Result<()> {
    tracing::debug!(millis = args.millis, parts = %args.parts, "splitting duration");
    let breakdown = decompose(args.millis, args.parts, args.strings);

    match format {
        OutputFormat::Text => print!("{}", format_breakdown_text(&breakdown)),
        OutputFormat::Json => print_json(&breakdown)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
