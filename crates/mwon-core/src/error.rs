//! Error types and handling for mwon-core operations.
//!
//! Only retrieval can fail. Parsing is lenient: malformed bullets and missing
//! section headings degrade to fewer records (and diagnostics), never to an
//! error.
//!
//! ## Error Categories
//!
//! - **Retrieval Errors**: the server answered with a non-success status
//! - **Network Errors**: the request could not be completed at all
//! - **URL Errors**: the document location is not a valid URL
//!
//! ```rust
//! use mwon_core::Error;
//!
//! let err = Error::Retrieval {
//!     url: "https://wiki.example.org/index.php?title=Foo&action=raw".to_string(),
//!     status: 503,
//! };
//! assert_eq!(err.category(), "retrieval");
//! assert!(err.is_recoverable());
//! ```

use thiserror::Error;

/// The main error type for mwon-core operations.
///
/// All fallible public functions in mwon-core return `Result<T, Error>`.
#[derive(Error, Debug)]
pub enum Error {
    /// The document server answered with a non-success status.
    ///
    /// The whole operation is aborted; no partial records are produced.
    #[error("Failed to fetch page '{url}'. Status code: {status}")]
    Retrieval {
        /// URL the request was issued against (after `action=raw` was applied).
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The request could not be completed (DNS, TLS, connection reset, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The document location could not be parsed as a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Check if the error might go away if the caller retries later.
    ///
    /// mwon-core never retries on its own; this is a hint for callers.
    ///
    /// - Retrieval: server errors (5xx), 408 and 429
    /// - Network: timeouts and connection failures
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Retrieval { status, .. } => {
                *status >= 500 || matches!(*status, 408 | 429)
            },
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidUrl(_) => false,
        }
    }

    /// Get the error category as a string identifier for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Retrieval { .. } => "retrieval",
            Self::Network(_) => "network",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }

    /// HTTP status carried by a retrieval failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Retrieval { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
