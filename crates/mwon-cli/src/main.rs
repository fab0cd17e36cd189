//! mwon CLI - convert MWON wiki pages into JSON records
//!
//! This is the main entry point for the mwon command-line interface.

use anyhow::Result;
use clap::Parser;
use mwon_cli::cli::Cli;
use mwon_cli::commands;
use mwon_cli::utils::logging::initialize_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    commands::convert(&cli).await
}
