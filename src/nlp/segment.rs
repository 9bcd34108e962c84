//! Sentence segmentation.
//!
//! Splits body text on the literal `". "` delimiter — a deliberate
//! simplification, not a language-aware boundary detector; abbreviations and
//! decimal numbers will mis-segment. Each fragment is scrubbed against a
//! character allow-list (ASCII alphanumerics, whitespace, and six South-Asian
//! script ranges), whitespace-normalized, and assigned a sequential 1-based
//! position id. Ids reflect original order and are the join key for every
//! downstream statistic.

use regex::Regex;

use crate::types::Sentence;

/// Literal delimiter between sentences.
const SENTENCE_DELIMITER: &str = ". ";

/// Characters outside this class are replaced with a space: digits, ASCII
/// letters, whitespace, and the Devanagari, Bengali, Gujarati, Tamil, Telugu
/// and Malayalam blocks.
const SCRUB_PATTERN: &str = concat!(
    r"[^0-9A-Za-z\s",
    r"\x{0900}-\x{097F}", // Devanagari
    r"\x{0980}-\x{09FF}", // Bengali
    r"\x{0A80}-\x{0AFF}", // Gujarati
    r"\x{0B80}-\x{0BFF}", // Tamil
    r"\x{0C00}-\x{0C7F}", // Telugu
    r"\x{0D00}-\x{0D7F}", // Malayalam
    r"]"
);

/// Splits body text into position-stamped sentences.
#[derive(Debug, Clone)]
pub struct Segmenter {
    scrub: Regex,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            scrub: Regex::new(SCRUB_PATTERN).expect("allow-list pattern compiles"),
        }
    }

    /// Segment `body` into an ordered sequence of sentences.
    ///
    /// Fragments that become empty after scrubbing are discarded; surviving
    /// fragments receive sequential 1-based ids in original order.
    pub fn segment(&self, body: &str) -> Vec<Sentence> {
        body.split(SENTENCE_DELIMITER)
            .filter_map(|fragment| {
                let scrubbed = self.scrub.replace_all(fragment, " ");
                let text = scrubbed
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            })
            .enumerate()
            .map(|(i, text)| Sentence { id: i + 1, text })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_ids() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Cats purr. Dogs bark. Birds sing.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].id, 1);
        assert_eq!(sentences[0].text, "Cats purr");
        assert_eq!(sentences[1].id, 2);
        assert_eq!(sentences[1].text, "Dogs bark");
        // Trailing period is scrubbed from the final fragment.
        assert_eq!(sentences[2].text, "Birds sing");
    }

    #[test]
    fn test_punctuation_scrubbed() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("The mayor, angry, quit!");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "The mayor angry quit");
    }

    #[test]
    fn test_empty_fragments_discarded() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("First point. ... . Second point.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "First point");
        assert_eq!(sentences[1].id, 2);
        assert_eq!(sentences[1].text, "Second point");
    }

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   ").is_empty());
    }

    #[test]
    fn test_devanagari_preserved() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("मौसम आज साफ है. Traffic was heavy.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "मौसम आज साफ है");
    }

    #[test]
    fn test_other_scripts_scrubbed() {
        let segmenter = Segmenter::new();
        // Cyrillic is outside the allow-list.
        let sentences = segmenter.segment("Привет world today");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "world today");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("A  very\t spaced   sentence");
        assert_eq!(sentences[0].text, "A very spaced sentence");
    }
}
