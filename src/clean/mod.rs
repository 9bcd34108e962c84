//! Boilerplate removal and whitespace normalization for extracted text.
//!
//! The cleaner is a lossy heuristic denoiser tuned for news-site output. It
//! runs identically regardless of which extraction stage produced the input:
//! junk-phrase deletion first, then a line filter that drops caption
//! fragments, bylines and UI labels, then whitespace normalization.

mod rules;

pub use rules::{default_rules, JunkRule};

/// Lines shorter than this many characters are dropped.
const MIN_LINE_CHARS: usize = 20;

/// Lines with fewer than this many spaces are dropped — a line needs at
/// least four space-separated tokens to survive.
const MIN_LINE_SPACES: usize = 3;

/// Removes junk phrases and normalizes whitespace in raw extracted text.
///
/// Pure function of its input; no I/O.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    rules: Vec<JunkRule>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    /// Create a cleaner with the default junk-phrase rules.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a cleaner with a custom ordered rule list.
    pub fn with_rules(rules: Vec<JunkRule>) -> Self {
        Self { rules }
    }

    /// Clean raw extracted text.
    ///
    /// Steps, in order: delete every junk-rule match, drop short or
    /// token-poor lines, rejoin with single spaces and collapse whitespace
    /// runs.
    pub fn clean(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for rule in &self.rules {
            text = rule.strip(&text);
        }

        let kept: Vec<&str> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| line_survives(line))
            .collect();

        kept.join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn line_survives(line: &str) -> bool {
    line.chars().count() >= MIN_LINE_CHARS
        && line.matches(' ').count() >= MIN_LINE_SPACES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junk_line_removed_wellformed_line_survives() {
        let cleaner = TextCleaner::new();
        // 25 characters, 4 words: survives the line filter.
        let keep = "The measure passed today.";
        let raw = format!("Click here to read more\n{keep}");
        let cleaned = cleaner.clean(&raw);
        assert_eq!(cleaned, keep);
        assert!(!cleaned.to_lowercase().contains("click here"));
    }

    #[test]
    fn test_short_lines_dropped() {
        let cleaner = TextCleaner::new();
        let raw = "Photo: Reuters\nBy Jane Doe\nThe committee approved the measure after hours of debate";
        let cleaned = cleaner.clean(&raw);
        assert_eq!(
            cleaned,
            "The committee approved the measure after hours of debate"
        );
    }

    #[test]
    fn test_token_poor_line_dropped() {
        let cleaner = TextCleaner::new();
        // Long enough but only three space-separated tokens.
        let raw = "Extraordinarily lengthy headline-fragment\nThe committee approved the measure after hours of debate";
        let cleaned = cleaner.clean(&raw);
        assert!(!cleaned.contains("headline-fragment"));
    }

    #[test]
    fn test_whitespace_collapsed() {
        let cleaner = TextCleaner::new();
        let raw = "The   committee  approved the\tmeasure after   hours of debate";
        assert_eq!(
            cleaner.clean(raw),
            "The committee approved the measure after hours of debate"
        );
    }

    #[test]
    fn test_junk_inside_line_deleted_in_place() {
        let cleaner = TextCleaner::new();
        let raw = "The verdict also read surprised observers across the country";
        let cleaned = cleaner.clean(raw);
        assert_eq!(
            cleaned,
            "The verdict surprised observers across the country"
        );
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean(""), "");
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![JunkRule::new("sponsored content").unwrap()];
        let cleaner = TextCleaner::with_rules(rules);
        let raw = "Sponsored Content appears mid sentence in this line of text";
        let cleaned = cleaner.clean(raw);
        assert_eq!(cleaned, "appears mid sentence in this line of text");
        // Default junk phrases are not stripped by the custom set.
        let raw2 = "Click here for the committee vote results published today";
        assert!(cleaner.clean(raw2).to_lowercase().contains("click here"));
    }
}
