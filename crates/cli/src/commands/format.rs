// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `duratiform format` - render a duration through a format string

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use duratiform_core::{Template, DEFAULT_FORMAT};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct FormatArgs {
    /// Duration in milliseconds
    #[arg(value_name = "MILLIS", allow_negative_numbers = true)]
    pub millis: i64,

    /// Format string (default: $DURATIFORM_FORMAT, then "hh:mm:ss").
    /// Use `--` before formats that start with '-'
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,

    /// Read the format string from a file (one trailing newline is ignored)
    #[arg(long = "template-file", value_name = "PATH", conflicts_with = "format")]
    pub template_file: Option<PathBuf>,
}

/// Where the effective format string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSource {
    Argument,
    File,
    Env,
    Default,
}

#[derive(Debug, Serialize)]
struct FormatOutput<'a> {
    duration_ms: i64,
    format: &'a str,
    source: FormatSource,
    output: &'a str,
}

/// Pick the format string: argument, then template file, then the
/// environment, then [`DEFAULT_FORMAT`].
pub fn resolve_format(
    arg: Option<String>,
    template_file: Option<&Path>,
    env: Option<String>,
) -> Result<(String, FormatSource)> {
    if let Some(format) = arg {
        return Ok((format, FormatSource::Argument));
    }
    if let Some(path) = template_file {
        return Ok((read_template_file(path)?, FormatSource::File));
    }
    if let Some(format) = env {
        return Ok((format, FormatSource::Env));
    }
    Ok((DEFAULT_FORMAT.to_string(), FormatSource::Default))
}

/// Read a format string from disk, dropping a single trailing newline.
fn read_template_file(path: &Path) -> Result<String> {
    let mut content = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("failed to read template file {}: {}", path.display(), e)
    })?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

pub fn handle(args: FormatArgs, format: OutputFormat) -> Result<()> {
    let (format_str, source) = resolve_format(
        args.format,
        args.template_file.as_deref(),
        crate::env::format(),
    )?;
    tracing::debug!(millis = args.millis, format = %format_str, ?source, "formatting duration");

    let rendered = Template::compile(&format_str).render(args.millis);

    match format {
        OutputFormat::Text => println!("{}", rendered),
        OutputFormat::Json => print_json(&FormatOutput {
            duration_ms: args.millis,
            format: &format_str,
            source,
            output: &rendered,
        })?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
