//! Read one page, parse it, print its records.

use anyhow::{Context, Result};
use mwon_core::{Diagnostic, DiagnosticSeverity, Fetcher, MwonParser};
use std::io::{self, Read, Write};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Input};
use crate::output::render;

/// Execute the conversion for the parsed command line.
///
/// Nothing is written to stdout unless the input was read successfully.
pub async fn execute(cli: &Cli) -> Result<()> {
    let input = cli
        .input()
        .context("Provide a page URL or --file <PATH>")?;

    let text = load_input(&input, cli).await?;
    let result = MwonParser::new().parse(&text);

    for diagnostic in &result.diagnostics {
        log_diagnostic(diagnostic);
    }
    info!("Parsed {} records", result.records.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&result.records, cli.format, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Load the wikitext for an input source.
pub async fn load_input(input: &Input, cli: &Cli) -> Result<String> {
    match input {
        Input::Url(url) => {
            let fetcher = Fetcher::with_config(&cli.fetch_config())?;
            let text = fetcher.fetch(url).await.inspect_err(|err| {
                debug!(
                    category = err.category(),
                    recoverable = err.is_recoverable(),
                    "Fetch failed"
                );
            })?;
            Ok(text)
        },
        Input::File(path) => {
            debug!(path = %path.display(), "Reading wikitext from file");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        },
        Input::Stdin => {
            debug!("Reading wikitext from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        },
    }
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    let line = diagnostic
        .line
        .map_or_else(String::new, |line| format!("line {line}: "));
    match diagnostic.severity {
        DiagnosticSeverity::Warn => warn!("{line}{}", diagnostic.message),
        DiagnosticSeverity::Info => debug!("{line}{}", diagnostic.message),
    }
}
