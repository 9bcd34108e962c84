//! Summarization components
//!
//! Provides sentence scoring by aggregate TF-IDF mass and budgeted
//! selection that preserves original document order.

pub mod scorer;
pub mod selector;

pub use scorer::score_sentences;
pub use selector::{compose, SummaryResult, SummarySelector};
