// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `duratiform explain` - show how a format string is compiled

use anyhow::Result;
use clap::Args;
use duratiform_core::{Granularity, Segment, Template, Width};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ExplainArgs {
    /// Format string to compile. Use `--` before formats that start with '-'
    #[arg(value_name = "FORMAT")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct Explanation<'a> {
    segments: &'a [Segment],
    granularity: Option<Granularity>,
    canonical: String,
}

fn describe_segment(segment: &Segment) -> String {
    match segment {
        Segment::Literal(text) => format!("literal      {:?}", text),
        Segment::Placeholder(p) => {
            let width = match p.width {
                Width::Single => "1+ digits",
                Width::Double => "2+ digits",
            };
            let letters = p.to_string();
            format!("{:<12} {:<2} ({})", p.unit.name(), letters, width)
        }
    }
}

/// Human-readable listing of a compiled template.
pub fn format_explanation(template: &Template) -> String {
    let mut out = String::new();
    for segment in template.segments() {
        out.push_str(&describe_segment(segment));
        out.push('\n');
    }
    match template.granularity() {
        Some(g) => out.push_str(&format!("granularity: {}\n", g)),
        None => out.push_str("granularity: none (literal only)\n"),
    }
    out.push_str(&format!("canonical: {}\n", template));
    out
}

pub fn handle(args: ExplainArgs, format: OutputFormat) -> Result<()> {
    let template = Template::compile(&args.format);

    match format {
        OutputFormat::Text => print!("{}", format_explanation(&template)),
        OutputFormat::Json => print_json(&Explanation {
            segments: template.segments(),
            granularity: template.granularity(),
            canonical: template.to_string(),
        })?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
