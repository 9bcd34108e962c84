//! Extractive news summarization: cascading article extraction plus
//! TF-IDF sentence ranking.
//!
//! The pipeline runs in two halves. Extraction turns a URL into clean
//! article text through three increasingly permissive strategies
//! (site-specific containers → readability → every paragraph), accepting the
//! first whose cleaned body is long enough to look like a real article.
//! Summarization segments that text into position-stamped sentences, scores
//! each by its aggregate TF-IDF mass, selects a fixed budget of top
//! sentences, and recomposes them in source order.
//!
//! ```
//! use newsgist::pipeline::{NoopObserver, SummaryPipeline};
//! use newsgist::types::SummaryLength;
//!
//! let pipeline = SummaryPipeline::new();
//! let body = "Cats are mammals. Cats purr often. Dogs are mammals too. \
//!             Dogs bark loudly. Mammals need oxygen.";
//! let summary = pipeline.summarize_text(body, SummaryLength::Low, &mut NoopObserver);
//! assert_eq!(summary, "Cats purr often. Dogs bark loudly. Mammals need oxygen.");
//! ```
//!
//! Fetching a live page goes through [`pipeline::SummaryPipeline::summarize_url`],
//! which never fails: extraction degrades to an empty article, and an empty
//! body summarizes to the degenerate `"."`.

pub mod clean;
pub mod collab;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod stats;
pub mod summary;
pub mod types;

pub use clean::TextCleaner;
pub use extract::ContentExtractor;
pub use pipeline::{SummaryOutput, SummaryPipeline};
pub use types::{Article, SummaryLength};
