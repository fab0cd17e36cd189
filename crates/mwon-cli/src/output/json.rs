//! JSON output formatting

use anyhow::Result;
use mwon_core::Record;
use std::io::Write;

/// Writes records as JSON documents.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format records as a pretty-printed JSON array
    pub fn write_array<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        Ok(())
    }

    /// Format records as newline-delimited JSON
    pub fn write_ndjson<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
        for record in records {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
