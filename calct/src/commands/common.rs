//! Common types and utilities for calct commands.
//!
//! Input acquisition and token rendering are shared by every subcommand so
//! that `tokenize`, `repl` and `demo` print tokens identically.

use std::io::{Read, Write};
use std::path::Path;

use calc_lex::{OverflowPolicy, SpannedToken};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CalctError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One display form per line, e.g. `NumberToken 42`
    #[default]
    Text,
    /// A JSON array of tagged token objects
    Json,
}

/// Command-line spelling of [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Accumulate oversized numbers modulo 2^64
    Wrapping,
    /// Clamp oversized numbers to the largest u64
    Saturating,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Wrapping => OverflowPolicy::Wrapping,
            OverflowArg::Saturating => OverflowPolicy::Saturating,
        }
    }
}

/// Rendering options resolved from flags and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Whether to include source positions.
    pub spans: bool,
}

// ============================================================================
// Input
// ============================================================================

/// Picks the expression text: an inline expression wins over a file, and
/// stdin is read when neither is given.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD and lex as `Unknown`.
pub fn read_input(expr: Option<&str>, file: Option<&Path>, stdin: impl Read) -> Result<String> {
    if let Some(expr) = expr {
        return Ok(expr.to_string());
    }

    if let Some(path) = file {
        let bytes = std::fs::read(path)
            .map_err(|e| CalctError::Input(format!("cannot read {}: {}", path.display(), e)))?;
        return Ok(decode_lossy(bytes));
    }

    let mut buffer = Vec::new();
    let mut stdin = stdin;
    stdin.read_to_end(&mut buffer)?;
    Ok(decode_lossy(buffer))
}

/// Decodes `bytes` as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Writes `tokens` to `out` according to `options`.
pub fn render_tokens(
    out: &mut impl Write,
    tokens: &[SpannedToken],
    options: RenderOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            for spanned in tokens {
                if options.spans {
                    writeln!(out, "{}\t{}", spanned.span, spanned.token)?;
                } else {
                    writeln!(out, "{}", spanned.token)?;
                }
            }
        }
        OutputFormat::Json => {
            let records = tokens
                .iter()
                .map(|spanned| token_record(spanned, options.spans))
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn token_record(spanned: &SpannedToken, spans: bool) -> Result<Value> {
    let mut record = serde_json::to_value(&spanned.token)?;
    if spans {
        if let Value::Object(map) = &mut record {
            map.insert("start".into(), spanned.span.start.into());
            map.insert("end".into(), spanned.span.end.into());
            map.insert("line".into(), spanned.span.line.into());
            map.insert("column".into(), spanned.span.column.into());
        }
    }
    Ok(record)
}
