//! Junk-phrase rules for the text cleaner.
//!
//! Each rule is a case-insensitive pattern whose matches are deleted from the
//! text (not replaced). The default set targets news-site boilerplate:
//! promotional stubs, cross-links, attribution desks and a listicle headline
//! pattern. Rules are an ordered list so callers can extend or replace them
//! without touching the cleaning algorithm.

use regex::Regex;

/// A single deletion rule.
#[derive(Debug, Clone)]
pub struct JunkRule {
    pattern: Regex,
}

impl JunkRule {
    /// Compile a rule from a regex pattern. Matching is case-insensitive.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("(?i){pattern}"))?;
        Ok(Self { pattern })
    }

    /// Delete every match of this rule from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }

    /// True if the rule matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// The default junk-phrase rule set.
///
/// The `10\s+[a-zA-Z]+` listicle rule is deliberately broad and can delete
/// legitimate numeric phrases ("10 people were injured"); see DESIGN.md.
pub fn default_rules() -> Vec<JunkRule> {
    [
        r"read more",
        r"also read",
        r"toi entertainment desk",
        r"recommended stories",
        r"most searched",
        r"trending",
        r"click here",
        r"follow us on",
        r"10\s+[a-zA-Z]+",
        r"we let chatgpt",
    ]
    .iter()
    .filter_map(|p| JunkRule::new(p).ok())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_is_case_insensitive() {
        let rule = JunkRule::new("read more").unwrap();
        assert_eq!(rule.strip("Read More about this"), " about this");
        assert_eq!(rule.strip("READ MORE"), "");
    }

    #[test]
    fn test_rule_deletes_not_replaces() {
        let rule = JunkRule::new("click here").unwrap();
        assert_eq!(rule.strip("Please Click Here now"), "Please  now");
    }

    #[test]
    fn test_listicle_rule() {
        let rule = JunkRule::new(r"10\s+[a-zA-Z]+").unwrap();
        assert_eq!(rule.strip("10 reasons to care"), " to care");
        // Numbers other than 10 are untouched.
        assert_eq!(rule.strip("12 reasons to care"), "12 reasons to care");
    }

    #[test]
    fn test_default_rules_compile() {
        let rules = default_rules();
        assert_eq!(rules.len(), 10);
        assert!(rules.iter().any(|r| r.is_match("Follow us on Twitter")));
    }
}
