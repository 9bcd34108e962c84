//! Term statistics over a fixed sentence set
//!
//! This module provides word counts, per-sentence frequency tables, and the
//! TF / IDF / TF-IDF computations used to score sentences.

pub mod frequency;
pub mod tfidf;

pub use frequency::{sentence_frequencies, word_counts};
pub use tfidf::{inverse_document_frequencies, term_frequencies, tf_idf};
