//! # Output Formatting
//!
//! Records are printed in one of three formats:
//!
//! - **JSON**: a single array, pretty-printed with two-space indentation
//! - **NDJSON**: one compact record per line, for streaming tools
//! - **Text**: a human-readable listing with colors
//!
//! Formatters write to any [`std::io::Write`] so commands can target stdout
//! and tests can target a buffer.

mod json;
mod text;

use anyhow::Result;
use mwon_core::Record;
use std::io::Write;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single pretty-printed JSON array (default)
    Json,
    /// Newline-delimited JSON
    Ndjson,
    /// Human-readable text
    Text,
}

impl OutputFormat {
    /// `true` for formats meant to be consumed by other programs.
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Ndjson)
    }
}

/// Writes records in the requested format.
pub fn render<W: Write>(records: &[Record], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => JsonFormatter::write_array(records, out),
        OutputFormat::Ndjson => JsonFormatter::write_ndjson(records, out),
        OutputFormat::Text => TextFormatter::write_records(records, out),
    }
}
