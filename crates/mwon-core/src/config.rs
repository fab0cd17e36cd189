//! Fetch settings.
//!
//! There is no configuration file. The CLI fills a [`FetchConfig`] from its
//! flags (and the matching `MWON_*` environment variables); library callers
//! construct one directly or take the defaults.

use std::time::Duration;

/// Default `User-Agent` sent with every retrieval.
pub const DEFAULT_USER_AGENT: &str = concat!("mwon/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP client used by [`crate::Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Returns a copy with the given timeout in whole seconds (`0` disables it).
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    /// Returns a copy with a custom `User-Agent`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
