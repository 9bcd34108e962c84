//! Extraction strategy seam and the cascading content extractor.
//!
//! Each strategy attempts one extraction approach and returns `None` on any
//! transport or parse failure — a negative signal, never an error. The
//! cascade walks an ordered strategy list, cleans each candidate body, and
//! accepts the first whose cleaned text exceeds the acceptance threshold.
//!
//! # Contract
//!
//! - **Input**: an untrusted URL string.
//! - **Output**: `Some(Article)` with raw (uncleaned) body text, or `None`.
//! - **Failure**: swallowed. Strategies log at debug level and yield `None`;
//!   the cascade's job is to degrade gracefully, not to report transport
//!   errors.

use tracing::debug;

use crate::clean::TextCleaner;
use crate::extract::generic::FullPageExtractor;
use crate::extract::readable::ReadabilityExtractor;
use crate::extract::site::SiteContainerExtractor;
use crate::types::Article;

/// Minimum cleaned-body length (in characters) for a stage's output to be
/// accepted — a proxy for "a real article body, not a stub or error page".
const MIN_BODY_CHARS: usize = 200;

/// One attempt at turning a URL into an article.
pub trait ExtractStrategy {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Attempt extraction. `None` means "no result", not an error.
    fn try_extract(&self, url: &str) -> Option<Article>;
}

/// Ordered cascade of extraction strategies with a shared text cleaner.
///
/// `extract` never fails: when no stage's output is accepted, the most
/// recent candidate (the last resort's output, however short) is returned,
/// and when every stage yields `None` the fixed fallback article is.
pub struct ContentExtractor {
    strategies: Vec<Box<dyn ExtractStrategy>>,
    cleaner: TextCleaner,
    min_body_chars: usize,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor {
    /// Build the standard three-stage cascade: site-specific containers,
    /// readability extraction, then the generic all-paragraphs fallback.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(SiteContainerExtractor::new()),
            Box::new(ReadabilityExtractor::new()),
            Box::new(FullPageExtractor::new()),
        ])
    }

    /// Build a cascade from a custom strategy list.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractStrategy>>) -> Self {
        Self {
            strategies,
            cleaner: TextCleaner::new(),
            min_body_chars: MIN_BODY_CHARS,
        }
    }

    /// Replace the shared text cleaner.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Extract an article from `url`. Never raises to the caller.
    pub fn extract(&self, url: &str) -> Article {
        let mut last_resort: Option<Article> = None;

        for strategy in &self.strategies {
            let Some(mut article) = strategy.try_extract(url) else {
                debug!(strategy = strategy.name(), url, "extraction stage yielded no result");
                continue;
            };

            article.body_text = self.cleaner.clean(&article.body_text);
            let body_chars = article.body_text.chars().count();

            if body_chars > self.min_body_chars {
                debug!(
                    strategy = strategy.name(),
                    url, body_chars, "extraction stage accepted"
                );
                return article;
            }

            debug!(
                strategy = strategy.name(),
                url, body_chars, "extraction stage below acceptance threshold"
            );
            last_resort = Some(article);
        }

        last_resort.unwrap_or_else(Article::fallback)
    }
}
