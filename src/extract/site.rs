//! Stage 1: structured extraction from known site containers.
//!
//! Fetches the page, takes the first `<h1>` as the title, and assembles the
//! body from publisher-specific content containers (class-name based blocks)
//! or, failing that, from the paragraphs of an `<article>` element. Yields
//! no result when neither shape is present — the signal that sends the
//! cascade to the readability stage.

use scraper::Html;
use tracing::debug;

use crate::extract::dom::{first_heading, joined_text};
use crate::extract::fetch::PageFetcher;
use crate::extract::strategy::ExtractStrategy;
use crate::types::Article;

/// Publisher-specific content containers, tried in order. Each is a CSS
/// selector for the blocks a known site nests its article body in.
const DEFAULT_CONTAINERS: [&str; 2] = ["div.Normal", "div.ga-headlines"];

pub struct SiteContainerExtractor {
    fetcher: PageFetcher,
    containers: Vec<String>,
}

impl Default for SiteContainerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteContainerExtractor {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
            containers: DEFAULT_CONTAINERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the publisher container selector list.
    pub fn with_containers(mut self, containers: Vec<String>) -> Self {
        self.containers = containers;
        self
    }

    /// Structured extraction over already-fetched HTML.
    pub fn extract_from_html(html: &str, containers: &[String]) -> Option<Article> {
        let document = Html::parse_document(html);
        let title = first_heading(&document);

        let body_text = containers
            .iter()
            .find_map(|selector| joined_text(&document, selector))
            .or_else(|| joined_text(&document, "article p"))?;

        Some(Article { title, body_text })
    }
}

impl ExtractStrategy for SiteContainerExtractor {
    fn name(&self) -> &'static str {
        "site_containers"
    }

    fn try_extract(&self, url: &str) -> Option<Article> {
        let html = self
            .fetcher
            .fetch(url)
            .map_err(|e| debug!(url, error = %e, "site container fetch failed"))
            .ok()?;
        Self::extract_from_html(&html, &self.containers)
    }
}
