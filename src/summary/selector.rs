//! Budgeted sentence selection for summarization.
//!
//! Ranks sentences by aggregate TF-IDF score, keeps the top K for the
//! requested length preset, then restores original document order so the
//! summary reads as prose rather than as a score ranking.

use std::cmp::Ordering;

use crate::types::{SentenceScore, SummaryLength};

/// Result of sentence selection
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SentenceScore>,
    /// The composed summary text
    pub text: String,
}

/// Score-ranked, budget-bounded sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SummarySelector {
    length: SummaryLength,
}

impl SummarySelector {
    /// Create a selector for the given length preset
    pub fn new(length: SummaryLength) -> Self {
        Self { length }
    }

    /// Select sentences and compose the summary.
    ///
    /// Ranking sorts by score descending with ascending position id as the
    /// tie-break, so repeated runs over identical input select identically.
    /// The selection is then re-sorted by position id: summaries must read
    /// in source order, not score order.
    pub fn select(&self, scores: &[SentenceScore]) -> SummaryResult {
        let mut ranked: Vec<SentenceScore> = scores.to_vec();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });

        ranked.truncate(self.length.budget());
        ranked.sort_by_key(|s| s.id);

        let text = compose(&ranked);
        SummaryResult {
            sentences: ranked,
            text,
        }
    }
}

/// Join selected sentence texts with `". "` and a trailing period.
///
/// An empty selection yields the degenerate `"."` — the caller's signal of
/// upstream extraction failure.
pub fn compose(selected: &[SentenceScore]) -> String {
    let joined: Vec<&str> = selected.iter().map(|s| s.text.as_str()).collect();
    format!("{}.", joined.join(". "))
}
