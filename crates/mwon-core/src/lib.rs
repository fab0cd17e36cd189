//! # mwon-core
//!
//! Turns MWON wiki pages into structured records.
//!
//! MWON is a writing convention on top of MediaWiki markup: every
//! `=== Title ===` section becomes one record, `* key: value` bullets become
//! scalar fields, `* key` bullets followed by `** item` lines become lists, and
//! remaining prose is collected under `section body`.
//!
//! ## Architecture
//!
//! - **Fetching**: [`Fetcher`] retrieves page source with `action=raw`
//! - **Normalizing**: [`normalize`] trims whitespace and trailing direction marks
//! - **Parsing**: [`MwonParser`] splits sections and folds bullets into [`Record`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use mwon_core::parse_records;
//!
//! let text = "== Ignore ==\n=== Alpha ===\n* Key: Value\n* Tags\n** a\n** b\n\nfree text";
//! let records = parse_records(text);
//!
//! assert_eq!(
//!     serde_json::to_string(&records)?,
//!     r#"[{"id":"Alpha","Key":"Value","Tags":["a","b"],"section body":"free text"}]"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Known quirk
//!
//! Only the last `* key` declared in a section is dropped when no `** item`
//! follows it. Earlier declarations left empty are emitted as `[]`. This keeps
//! the output identical for pages written against earlier tooling.

/// Fetch settings
pub mod config;
/// Error types and result aliases
pub mod error;
/// HTTP retrieval of raw wikitext
pub mod fetcher;
/// Whitespace and direction-mark normalization
pub mod normalize;
/// Section and bullet parser
pub mod parser;
/// Record and diagnostic types
pub mod types;

pub use config::{DEFAULT_USER_AGENT, FetchConfig};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, ensure_raw_action};
pub use normalize::{is_direction_mark, normalize};
pub use parser::{MwonParser, ParseResult, parse_records};
pub use types::*;
