//! Word tokenization.
//!
//! Tokens are maximal runs of Unicode alphanumeric characters, so
//! punctuation-only tokens never appear. The same tokenizer backs both the
//! per-sentence word counts (original case) and the frequency tables
//! (lowercased by the caller).

/// Iterate the word tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Number of word tokens in `text`.
pub fn word_count(text: &str) -> usize {
    words(text).count()
}
