//! Page fetching.
//!
//! Blocking HTTP GET with a browser-like User-Agent and a bounded timeout.
//! The cascade treats every failure here as "stage yielded no result", so
//! the error type exists for logging, not for propagation past the
//! extractor's boundary.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use thiserror::Error;
use url::Url;

/// Browser-like User-Agent; many news sites serve stripped pages to
/// obvious bots.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Per-attempt request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirects to follow.
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches raw HTML pages for the extraction strategies.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    timeout: Duration,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch a page and return its body as text.
    ///
    /// The URL is parsed first, so malformed input fails fast without
    /// touching the network.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url.trim())?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text()?)
    }
}
