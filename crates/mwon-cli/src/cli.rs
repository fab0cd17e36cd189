//! # CLI Structure and Argument Parsing
//!
//! `mwon` has a single job: read one MWON page and print its records.
//!
//! ```bash
//! # Fetch a wiki page (action=raw is added automatically)
//! mwon "https://wiki.example.org/index.php?title=Datasets"
//!
//! # Parse a local copy, or stdin
//! mwon --file Datasets.wiki
//! curl -s "$URL&action=raw" | mwon --file -
//!
//! # One record per line for streaming tools
//! mwon "$URL" --format ndjson | jq -c .id
//! ```
//!
//! Network settings can also be given through `MWON_TIMEOUT` and
//! `MWON_USER_AGENT`. Both are optional; with neither set, requests have no
//! timeout and use the default user agent.

use clap::Parser;
use mwon_core::FetchConfig;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Convert an MWON wiki page into JSON records
#[derive(Parser, Clone, Debug)]
#[command(name = "mwon", version, about, long_about = None)]
pub struct Cli {
    /// Page URL; `action=raw` is added to the query when missing
    #[arg(value_name = "URL", required_unless_present = "file")]
    pub url: Option<String>,

    /// Read wikitext from a file instead of fetching (`-` for stdin)
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Optional request timeout in seconds; without it (or with 0) there is no timeout
    #[arg(long, value_name = "SECS", env = "MWON_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Optional `User-Agent` header; defaults to `mwon/<version>`
    #[arg(long, value_name = "AGENT", env = "MWON_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Enable verbose logging output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log parser diagnostics and request details
    #[arg(long)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// Where the wikitext comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Fetch from a wiki.
    Url(String),
    /// Read a local file.
    File(PathBuf),
    /// Read standard input.
    Stdin,
}

impl Cli {
    /// Resolves the input source. `--file -` means stdin.
    pub fn input(&self) -> Option<Input> {
        match (&self.file, &self.url) {
            (Some(path), _) if path.as_os_str() == "-" => Some(Input::Stdin),
            (Some(path), _) => Some(Input::File(path.clone())),
            (None, Some(url)) => Some(Input::Url(url.clone())),
            (None, None) => None,
        }
    }

    /// HTTP settings from flags and environment.
    pub fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent.clone());
        }
        config
    }
}
