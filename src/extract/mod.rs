//! Content extraction
//!
//! This module provides the three-stage extraction cascade: structured
//! site-container extraction, readability-library extraction, and the
//! generic all-paragraphs fallback, plus the page fetcher they share.

mod dom;

pub mod fetch;
pub mod generic;
pub mod readable;
pub mod site;
pub mod strategy;

pub use fetch::{FetchError, PageFetcher};
pub use generic::FullPageExtractor;
pub use readable::ReadabilityExtractor;
pub use site::SiteContainerExtractor;
pub use strategy::{ContentExtractor, ExtractStrategy};
