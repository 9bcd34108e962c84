//! TF, IDF and TF-IDF over a fixed sentence set.
//!
//! All three statistics are collections of [`TermWeight`] records keyed by
//! `(sentence_id, word)`. TF and IDF are computed independently and joined
//! by that composite key; a TF record with no matching IDF entry contributes
//! 0 rather than failing. Pure functions, deterministic, no shared state
//! across calls.

use rustc_hash::FxHashMap;

use crate::types::{SentenceFrequency, TermWeight, WordCounts};

/// Term frequency per `(sentence_id, word)` pair.
///
/// `tf = occurrences_in_sentence / max(1, sentence_word_count)`; the floor
/// guards degenerate zero-token sentences.
pub fn term_frequencies(counts: &WordCounts, freqs: &[SentenceFrequency]) -> Vec<TermWeight> {
    freqs
        .iter()
        .flat_map(|sentence| {
            let tokens = counts.get(&sentence.id).copied().unwrap_or(0).max(1);
            sentence.counts.iter().map(move |(word, &occurrences)| TermWeight {
                sentence_id: sentence.id,
                word: word.clone(),
                weight: occurrences as f64 / tokens as f64,
            })
        })
        .collect()
}

/// Inverse document frequency per observed `(sentence_id, word)` pair.
///
/// `idf = ln(N / (df + 1))` with `N = max(1, total_sentences)` and `df` the
/// number of sentences containing the word. The `+1` smoothing keeps the
/// denominator non-zero and pushes ubiquitous words to near-zero or negative
/// weight, which is intentional.
pub fn inverse_document_frequencies(
    total_sentences: usize,
    freqs: &[SentenceFrequency],
) -> Vec<TermWeight> {
    let n = total_sentences.max(1) as f64;

    let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
    for sentence in freqs {
        for word in sentence.counts.keys() {
            *document_frequency.entry(word).or_insert(0) += 1;
        }
    }

    freqs
        .iter()
        .flat_map(|sentence| {
            let document_frequency = &document_frequency;
            sentence.counts.keys().map(move |word| {
                let df = document_frequency.get(word.as_str()).copied().unwrap_or(0);
                TermWeight {
                    sentence_id: sentence.id,
                    word: word.clone(),
                    weight: (n / (df + 1) as f64).ln(),
                }
            })
        })
        .collect()
}

/// Join TF and IDF on `(sentence_id, word)` into TF-IDF.
///
/// Missing IDF entries default to 0.0 — the join never fails.
pub fn tf_idf(tf: &[TermWeight], idf: &[TermWeight]) -> Vec<TermWeight> {
    let lookup: FxHashMap<(usize, &str), f64> = idf
        .iter()
        .map(|record| ((record.sentence_id, record.word.as_str()), record.weight))
        .collect();

    tf.iter()
        .map(|record| {
            let idf_weight = lookup
                .get(&(record.sentence_id, record.word.as_str()))
                .copied()
                .unwrap_or(0.0);
            TermWeight {
                sentence_id: record.sentence_id,
                word: record.word.clone(),
                weight: record.weight * idf_weight,
            }
        })
        .collect()
}
