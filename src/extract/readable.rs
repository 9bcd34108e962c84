//! Stage 2: readability-library extraction.
//!
//! Runs the fetched page through a general-purpose article-readability
//! parser and uses its derived title and text as-is. The cascade still
//! cleans the result and applies the same acceptance threshold.

use std::io::Cursor;

use tracing::debug;
use url::Url;

use crate::extract::fetch::PageFetcher;
use crate::extract::strategy::ExtractStrategy;
use crate::types::Article;

#[derive(Debug, Default)]
pub struct ReadabilityExtractor {
    fetcher: PageFetcher,
}

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
        }
    }
}

impl ExtractStrategy for ReadabilityExtractor {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn try_extract(&self, url: &str) -> Option<Article> {
        let html = self
            .fetcher
            .fetch(url)
            .map_err(|e| debug!(url, error = %e, "readability fetch failed"))
            .ok()?;
        let base = Url::parse(url.trim()).ok()?;

        let mut reader = Cursor::new(html.into_bytes());
        match readability::extractor::extract(&mut reader, &base) {
            Ok(product) => Some(Article {
                title: product.title,
                body_text: product.text,
            }),
            Err(e) => {
                debug!(url, error = %e, "readability parse failed");
                None
            }
        }
    }
}
