//! Sentence scoring.
//!
//! Folds the TF-IDF record set into one aggregate score per sentence. The
//! aggregate is a plain sum of every record sharing the sentence id, so the
//! result is invariant to the order sentences were fed to the statistics
//! engine.

use rustc_hash::FxHashMap;

use crate::types::{Sentence, SentenceScore, TermWeight};

/// Sum TF-IDF mass per sentence.
///
/// Produces one [`SentenceScore`] per input sentence, in input order; a
/// sentence with no TF-IDF records scores 0.
pub fn score_sentences(sentences: &[Sentence], tfidf: &[TermWeight]) -> Vec<SentenceScore> {
    let mut totals: FxHashMap<usize, f64> = FxHashMap::default();
    for record in tfidf {
        *totals.entry(record.sentence_id).or_insert(0.0) += record.weight;
    }

    sentences
        .iter()
        .map(|s| SentenceScore {
            id: s.id,
            score: totals.get(&s.id).copied().unwrap_or(0.0),
            text: s.text.clone(),
        })
        .collect()
}
