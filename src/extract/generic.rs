//! Stage 3: generic all-paragraphs fallback.
//!
//! Last resort, low precision: first `<h1>` for the title and the text of
//! every `<p>` outside boilerplate, in document order. Guaranteed to return
//! something whenever the page can be fetched — possibly an empty body.

use scraper::Html;
use tracing::debug;

use crate::extract::dom::{first_heading, joined_text};
use crate::extract::fetch::PageFetcher;
use crate::extract::strategy::ExtractStrategy;
use crate::types::Article;

#[derive(Debug, Default)]
pub struct FullPageExtractor {
    fetcher: PageFetcher,
}

impl FullPageExtractor {
    pub fn new() -> Self {
        Self {
            fetcher: PageFetcher::new(),
        }
    }

    /// Generic extraction over already-fetched HTML. Always yields an
    /// article; the body may be empty.
    pub fn extract_from_html(html: &str) -> Article {
        let document = Html::parse_document(html);
        Article {
            title: first_heading(&document),
            body_text: joined_text(&document, "p").unwrap_or_default(),
        }
    }
}

impl ExtractStrategy for FullPageExtractor {
    fn name(&self) -> &'static str {
        "full_page"
    }

    fn try_extract(&self, url: &str) -> Option<Article> {
        let html = self
            .fetcher
            .fetch(url)
            .map_err(|e| debug!(url, error = %e, "full page fetch failed"))
            .ok()?;
        Some(Self::extract_from_html(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_paragraphs_in_document_order() {
        let html = r#"
            <html><body>
            <h1>Storm Warning</h1>
            <p>Heavy rain is expected.</p>
            <div><p>Rivers may flood.</p></div>
            <p>Residents should prepare.</p>
            </body></html>"#;
        let article = FullPageExtractor::extract_from_html(html);
        assert_eq!(article.title, "Storm Warning");
        assert_eq!(
            article.body_text,
            "Heavy rain is expected. Rivers may flood. Residents should prepare."
        );
    }

    #[test]
    fn test_boilerplate_paragraphs_excluded() {
        let html = r#"
            <body>
            <nav><p>Home News Sports</p></nav>
            <p>Actual story text.</p>
            <footer><p>All rights reserved.</p></footer>
            </body>"#;
        let article = FullPageExtractor::extract_from_html(html);
        assert_eq!(article.body_text, "Actual story text.");
    }

    #[test]
    fn test_no_paragraphs_yields_empty_body() {
        let html = "<body><h1>Bare Page</h1><div>No paragraph tags.</div></body>";
        let article = FullPageExtractor::extract_from_html(html);
        assert_eq!(article.title, "Bare Page");
        assert!(article.body_text.is_empty());
    }
}
