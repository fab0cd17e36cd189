//! Retrieval of raw page source over HTTP.

use crate::parser::{MwonParser, ParseResult};
use crate::{Error, FetchConfig, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Query parameter MediaWiki uses to select the response mode.
const ACTION_PARAM: &str = "action";
/// Mode that returns page source instead of rendered HTML.
const RAW_ACTION: &str = "raw";

/// HTTP client for fetching raw wikitext.
///
/// One GET per call: no retries, no caching, no conditional requests.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with default settings (no timeout).
    pub fn new() -> Result<Self> {
        Self::with_config(&FetchConfig::default())
    }

    /// Creates a fetcher from explicit settings.
    pub fn with_config(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches the source of a wiki page.
    ///
    /// `action=raw` is forced onto the query first (see [`ensure_raw_action`]).
    /// Any non-2xx status fails with [`Error::Retrieval`]; the body of a
    /// successful response is returned as-is.
    pub async fn fetch(&self, location: &str) -> Result<String> {
        let url = ensure_raw_action(location)?;
        debug!(%url, "Fetching raw wikitext");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%status, %url, "Retrieval rejected");
            return Err(Error::Retrieval {
                url,
                status: status.as_u16(),
            });
        }

        let content = response.text().await?;
        info!("Fetched {} bytes from {}", content.len(), url);

        Ok(content)
    }

    /// Fetches a page and parses it. Fails before parsing if the fetch fails.
    pub async fn fetch_records(&self, location: &str) -> Result<ParseResult> {
        let text = self.fetch(location).await?;
        Ok(MwonParser::new().parse(&text))
    }
}

/// Makes sure the query selects raw page source.
///
/// If the first `action` value is already `raw` the location is returned
/// unchanged, byte for byte. Otherwise every `action` pair is replaced by a
/// single `action=raw`, placed where the first `action` pair was (or appended);
/// all other pairs keep their order and repeats.
pub fn ensure_raw_action(location: &str) -> Result<String> {
    let mut url =
        Url::parse(location).map_err(|e| Error::InvalidUrl(format!("'{location}': {e}")))?;

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let current = pairs
        .iter()
        .find(|(key, _)| key == ACTION_PARAM)
        .map(|(_, value)| value.as_str());

    if current == Some(RAW_ACTION) {
        return Ok(location.to_string());
    }

    let mut rewritten = Vec::with_capacity(pairs.len() + 1);
    let mut placed = false;
    for (key, value) in pairs {
        if key != ACTION_PARAM {
            rewritten.push((key, value));
        } else if !placed {
            rewritten.push((key, RAW_ACTION.to_string()));
            placed = true;
        }
    }
    if !placed {
        rewritten.push((ACTION_PARAM.to_string(), RAW_ACTION.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(&rewritten);
    Ok(url.into())
}
