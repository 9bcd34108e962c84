//! Natural language processing components
//!
//! This module provides sentence segmentation and word tokenization.

pub mod segment;
pub mod tokenize;

pub use segment::Segmenter;
pub use tokenize::{word_count, words};
