//! Text output formatting

use anyhow::Result;
use colored::Colorize;
use mwon_core::{FieldValue, ID_FIELD, Record};
use std::io::Write;

/// Writes records as an indented, colored listing.
pub struct TextFormatter;

impl TextFormatter {
    /// Format records as an indented listing, one block per record
    pub fn write_records<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
        if records.is_empty() {
            writeln!(out, "No records found")?;
            return Ok(());
        }

        for (idx, record) in records.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", record.id().bold())?;

            for (key, value) in record.fields().filter(|(key, _)| *key != ID_FIELD) {
                match value {
                    FieldValue::Text(text) => writeln!(out, "  {}: {text}", key.cyan())?,
                    FieldValue::List(items) if items.is_empty() => {
                        writeln!(out, "  {}: {}", key.cyan(), "(empty)".dimmed())?;
                    },
                    FieldValue::List(items) => {
                        writeln!(out, "  {}:", key.cyan())?;
                        for item in items {
                            writeln!(out, "    - {item}")?;
                        }
                    },
                }
            }
        }

        Ok(())
    }
}
