//! Per-sentence word counts and frequency tables.
//!
//! Word counts use tokens as tokenized (original case); frequency tables
//! accumulate lowercased tokens. Both are keyed by the sentence's position
//! id, the join key for the TF/IDF computations downstream.

use rustc_hash::FxHashMap;

use crate::nlp::{word_count, words};
use crate::types::{Sentence, SentenceFrequency, WordCounts};

/// Token count per sentence id.
pub fn word_counts(sentences: &[Sentence]) -> WordCounts {
    sentences
        .iter()
        .map(|s| (s.id, word_count(&s.text)))
        .collect()
}

/// Case-folded occurrence counts for each sentence, in sentence order.
pub fn sentence_frequencies(sentences: &[Sentence]) -> Vec<SentenceFrequency> {
    sentences
        .iter()
        .map(|s| {
            let mut counts: FxHashMap<String, usize> = FxHashMap::default();
            for token in words(&s.text) {
                *counts.entry(token.to_lowercase()).or_insert(0) += 1;
            }
            SentenceFrequency { id: s.id, counts }
        })
        .collect()
}
