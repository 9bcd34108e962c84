//! Core data model shared across the pipeline.
//!
//! Everything here is request-scoped: each summarization request rebuilds its
//! own structures from scratch and discards them once the summary string is
//! produced. Sentence ids are assigned once at segmentation time and serve as
//! the join key for every downstream structure — they are never recomputed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Title used when a page yields no usable `<h1>`, and for the article
/// returned after a total extraction failure.
pub const FALLBACK_TITLE: &str = "News Article";

/// An extracted article: a title and its readable body text.
///
/// Produced once per extraction request, immutable after creation, owned by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Page headline, or [`FALLBACK_TITLE`] when none was found.
    pub title: String,
    /// Cleaned body text. Empty when extraction failed entirely.
    pub body_text: String,
}

impl Article {
    /// The article returned when every extraction stage fails.
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            body_text: String::new(),
        }
    }

    /// True when the body carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.body_text.is_empty()
    }
}

/// A normalized sentence with its stable 1-based position id.
///
/// Ids reflect original document order; the summarizer relies on them to
/// restore narrative order after ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 1-based position in the segmented body.
    pub id: usize,
    /// Punctuation-stripped, whitespace-normalized text.
    pub text: String,
}

/// Summary length preset, mapping to a fixed sentence-count budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    Low,
    Medium,
    High,
}

impl SummaryLength {
    /// Number of sentences this preset selects.
    pub fn budget(self) -> usize {
        match self {
            Self::Low => 3,
            Self::Medium => 5,
            Self::High => 7,
        }
    }

    /// Returns the user-facing name used in JSON and log messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One record of a per-term statistic, keyed by `(sentence_id, word)`.
///
/// The same record type carries TF, IDF and TF-IDF values; the collections
/// are computed independently and joined on the composite key.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub sentence_id: usize,
    pub word: String,
    pub weight: f64,
}

/// A sentence's aggregate TF-IDF mass, used for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    /// Original position id of the sentence.
    pub id: usize,
    /// Sum of all TF-IDF entries sharing this sentence id.
    pub score: f64,
    /// The sentence text, carried through for composition.
    pub text: String,
}

/// Token count per sentence id (punctuation-only tokens excluded).
pub type WordCounts = FxHashMap<usize, usize>;

/// Case-folded word occurrence counts for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFrequency {
    /// Position id of the sentence the counts belong to.
    pub id: usize,
    /// word (lowercased) → occurrences within the sentence.
    pub counts: FxHashMap<String, usize>,
}
