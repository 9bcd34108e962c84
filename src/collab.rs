//! Seams for the external collaborators the core hands its output to:
//! language detection, translation, and speech synthesis.
//!
//! The core never depends on a collaborator succeeding — every seam returns
//! `Option`, and [`deliver`] falls back to the untranslated summary (and to
//! no audio) rather than invalidating a computed summary.

use tracing::debug;

/// Detects the language of extracted body text.
///
/// Failure is silent: `None`, never an error.
pub trait LanguageDetector {
    /// ISO 639-1 code for the detected language, or `None`.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Translates a summary into a target language.
pub trait Translator {
    /// Translated text, or `None` on failure.
    fn translate(&self, text: &str, target: &str) -> Option<String>;
}

/// Renders a summary as speech.
pub trait SpeechSynthesizer {
    /// Encoded audio bytes, or `None` on failure.
    fn synthesize(&self, text: &str, lang: &str) -> Option<Vec<u8>>;
}

/// Dominant-script language detection.
///
/// Classifies by the script the text's letters predominantly fall in,
/// covering the same six South-Asian script blocks the segmenter admits
/// plus ASCII. Devanagari text reports as Hindi even when it is Marathi —
/// the scripts are shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRangeDetector;

impl ScriptRangeDetector {
    pub fn new() -> Self {
        Self
    }
}

const SCRIPT_RANGES: [(char, char, &str); 6] = [
    ('\u{0900}', '\u{097F}', "hi"), // Devanagari
    ('\u{0980}', '\u{09FF}', "bn"), // Bengali
    ('\u{0A80}', '\u{0AFF}', "gu"), // Gujarati
    ('\u{0B80}', '\u{0BFF}', "ta"), // Tamil
    ('\u{0C00}', '\u{0C7F}', "te"), // Telugu
    ('\u{0D00}', '\u{0D7F}', "ml"), // Malayalam
];

impl LanguageDetector for ScriptRangeDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let mut ascii = 0usize;
        let mut per_range = [0usize; SCRIPT_RANGES.len()];

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                ascii += 1;
                continue;
            }
            for (i, (lo, hi, _)) in SCRIPT_RANGES.iter().enumerate() {
                if (*lo..=*hi).contains(&c) {
                    per_range[i] += 1;
                    break;
                }
            }
        }

        let (best, &count) = per_range
            .iter()
            .enumerate()
            .max_by_key(|(_, &count)| count)?;

        if count == 0 && ascii == 0 {
            None
        } else if count > ascii {
            Some(SCRIPT_RANGES[best].2.to_string())
        } else {
            Some("en".to_string())
        }
    }
}

/// A delivered summary: final text plus optional rendered audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub text: String,
    pub audio: Option<Vec<u8>>,
}

/// Hand a computed summary to the optional collaborators.
///
/// Translation failure falls back to the original summary text; synthesis
/// failure yields no audio. Neither failure propagates.
pub fn deliver(
    summary: &str,
    lang: &str,
    translator: Option<&dyn Translator>,
    synthesizer: Option<&dyn SpeechSynthesizer>,
) -> Delivery {
    let text = match translator.and_then(|t| t.translate(summary, lang)) {
        Some(translated) => translated,
        None => {
            if translator.is_some() {
                debug!(lang, "translation failed, delivering untranslated summary");
            }
            summary.to_string()
        }
    };

    let audio = synthesizer.and_then(|s| s.synthesize(&text, lang));
    if synthesizer.is_some() && audio.is_none() {
        debug!(lang, "speech synthesis failed, delivering text only");
    }

    Delivery { text, audio }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Translator for Failing {
        fn translate(&self, _text: &str, _target: &str) -> Option<String> {
            None
        }
    }

    impl SpeechSynthesizer for Failing {
        fn synthesize(&self, _text: &str, _lang: &str) -> Option<Vec<u8>> {
            None
        }
    }

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, text: &str, _target: &str) -> Option<String> {
            Some(text.to_uppercase())
        }
    }

    #[test]
    fn test_detect_english() {
        let detector = ScriptRangeDetector::new();
        assert_eq!(
            detector.detect("The committee approved the measure").as_deref(),
            Some("en")
        );
    }

    #[test]
    fn test_detect_devanagari() {
        let detector = ScriptRangeDetector::new();
        assert_eq!(detector.detect("मौसम आज साफ है").as_deref(), Some("hi"));
    }

    #[test]
    fn test_detect_bengali_mixed_with_ascii() {
        let detector = ScriptRangeDetector::new();
        // More Bengali letters than ASCII ones.
        assert_eq!(detector.detect("আবহাওয়া আজ ভালো ok").as_deref(), Some("bn"));
    }

    #[test]
    fn test_detect_nothing_on_letterless_input() {
        let detector = ScriptRangeDetector::new();
        assert_eq!(detector.detect("1234 !!!"), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_failed_translation_keeps_summary() {
        let delivery = deliver("The summary.", "hi", Some(&Failing), None);
        assert_eq!(delivery.text, "The summary.");
        assert_eq!(delivery.audio, None);
    }

    #[test]
    fn test_failed_synthesis_keeps_text() {
        let delivery = deliver("The summary.", "en", Some(&Upper), Some(&Failing));
        assert_eq!(delivery.text, "THE SUMMARY.");
        assert_eq!(delivery.audio, None);
    }

    #[test]
    fn test_no_collaborators() {
        let delivery = deliver("The summary.", "en", None, None);
        assert_eq!(delivery.text, "The summary.");
        assert_eq!(delivery.audio, None);
    }
}
