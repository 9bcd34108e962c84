//! Pipeline runner — orchestrates the extraction-to-summary flow.
//!
//! [`SummaryPipeline`] executes the stages in order, threading the derived
//! structures between them and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Extract (URL entry point only) — cascade + cleaning
//! 2. Segment — position-stamped sentences
//! 3. Frequencies — word counts + per-sentence frequency tables
//! 4. TF, IDF, TF-IDF — term statistics and the composite-key join
//! 5. Score — per-sentence TF-IDF mass
//! 6. Select — rank, budget, restore source order, compose
//!
//! Everything downstream of extraction is pure in-memory computation; all
//! structures are request-scoped and discarded once the summary string is
//! produced. Concurrent callers need no locking — each call owns its own
//! structures.

use tracing::debug;

use crate::extract::ContentExtractor;
use crate::nlp::Segmenter;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_EXTRACT, STAGE_FREQUENCIES, STAGE_IDF,
    STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT, STAGE_TF, STAGE_TFIDF,
};
use crate::stats::{inverse_document_frequencies, sentence_frequencies, term_frequencies, tf_idf, word_counts};
use crate::summary::{score_sentences, SummarySelector};
use crate::types::{Article, SummaryLength};

/// Output of a URL summarization request.
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    /// The extracted (and cleaned) article.
    pub article: Article,
    /// The composed summary; `"."` when extraction produced no sentences.
    pub summary: String,
}

/// End-to-end summarization pipeline.
pub struct SummaryPipeline {
    extractor: ContentExtractor,
    segmenter: Segmenter,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPipeline {
    /// Build a pipeline with the standard extraction cascade.
    pub fn new() -> Self {
        Self {
            extractor: ContentExtractor::new(),
            segmenter: Segmenter::new(),
        }
    }

    /// Build a pipeline around a custom extractor.
    pub fn with_extractor(extractor: ContentExtractor) -> Self {
        Self {
            extractor,
            segmenter: Segmenter::new(),
        }
    }

    /// Extract an article from `url` and summarize its body.
    ///
    /// Never fails: extraction degrades to an empty article and an empty
    /// body summarizes to the degenerate `"."`.
    pub fn summarize_url(
        &self,
        url: &str,
        length: SummaryLength,
        observer: &mut impl PipelineObserver,
    ) -> SummaryOutput {
        observer.on_stage_start(STAGE_EXTRACT);
        let clock = StageClock::start();
        let article = self.extractor.extract(url);
        observer.on_stage_end(
            STAGE_EXTRACT,
            &StageReport::with_items(clock.elapsed(), article.body_text.chars().count()),
        );

        let summary = self.summarize_text(&article.body_text, length, observer);
        SummaryOutput { article, summary }
    }

    /// Summarize already-extracted body text.
    ///
    /// The pure part of the pipeline: no I/O, deterministic for identical
    /// input, including tie-breaking.
    pub fn summarize_text(
        &self,
        body: &str,
        length: SummaryLength,
        observer: &mut impl PipelineObserver,
    ) -> String {
        // Stage: segment
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segmenter.segment(body);
        observer.on_stage_end(
            STAGE_SEGMENT,
            &StageReport::with_items(clock.elapsed(), sentences.len()),
        );

        // Stage: frequencies
        observer.on_stage_start(STAGE_FREQUENCIES);
        let clock = StageClock::start();
        let counts = word_counts(&sentences);
        let frequencies = sentence_frequencies(&sentences);
        observer.on_stage_end(
            STAGE_FREQUENCIES,
            &StageReport::with_items(clock.elapsed(), frequencies.len()),
        );

        // Stage: tf
        observer.on_stage_start(STAGE_TF);
        let clock = StageClock::start();
        let tf = term_frequencies(&counts, &frequencies);
        observer.on_stage_end(STAGE_TF, &StageReport::with_items(clock.elapsed(), tf.len()));

        // Stage: idf
        observer.on_stage_start(STAGE_IDF);
        let clock = StageClock::start();
        let idf = inverse_document_frequencies(sentences.len(), &frequencies);
        observer.on_stage_end(STAGE_IDF, &StageReport::with_items(clock.elapsed(), idf.len()));

        // Stage: tfidf
        observer.on_stage_start(STAGE_TFIDF);
        let clock = StageClock::start();
        let weights = tf_idf(&tf, &idf);
        observer.on_stage_end(
            STAGE_TFIDF,
            &StageReport::with_items(clock.elapsed(), weights.len()),
        );

        // Stage: score
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scores = score_sentences(&sentences, &weights);
        observer.on_stage_end(
            STAGE_SCORE,
            &StageReport::with_items(clock.elapsed(), scores.len()),
        );

        // Stage: select
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let result = SummarySelector::new(length).select(&scores);
        observer.on_stage_end(
            STAGE_SELECT,
            &StageReport::with_items(clock.elapsed(), result.sentences.len()),
        );

        debug!(
            length = length.as_str(),
            sentences = sentences.len(),
            selected = result.sentences.len(),
            "summary composed"
        );
        result.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};

    const BODY: &str = "Cats are mammals. Cats purr often. Dogs are mammals too. \
                        Dogs bark loudly. Mammals need oxygen.";

    #[test]
    fn test_reference_scenario_low_budget() {
        // Hand-computed from the TF/IDF formulas: with five sentences the
        // highest-scoring three are "Cats purr often", "Dogs bark loudly"
        // and "Mammals need oxygen", restored to source order.
        let pipeline = SummaryPipeline::new();
        let summary = pipeline.summarize_text(BODY, SummaryLength::Low, &mut NoopObserver);
        assert_eq!(
            summary,
            "Cats purr often. Dogs bark loudly. Mammals need oxygen."
        );
    }

    #[test]
    fn test_budget_larger_than_corpus_keeps_everything() {
        let pipeline = SummaryPipeline::new();
        let summary = pipeline.summarize_text(BODY, SummaryLength::High, &mut NoopObserver);
        assert_eq!(
            summary,
            "Cats are mammals. Cats purr often. Dogs are mammals too. \
             Dogs bark loudly. Mammals need oxygen."
        );
    }

    #[test]
    fn test_idempotent_across_runs() {
        let pipeline = SummaryPipeline::new();
        let first = pipeline.summarize_text(BODY, SummaryLength::Medium, &mut NoopObserver);
        let second = pipeline.summarize_text(BODY, SummaryLength::Medium, &mut NoopObserver);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_body_degenerate_dot() {
        let pipeline = SummaryPipeline::new();
        assert_eq!(
            pipeline.summarize_text("", SummaryLength::Low, &mut NoopObserver),
            "."
        );
        assert_eq!(
            pipeline.summarize_text("   \n  ", SummaryLength::Low, &mut NoopObserver),
            "."
        );
    }

    #[test]
    fn test_observer_sees_all_text_stages() {
        let pipeline = SummaryPipeline::new();
        let mut observer = StageTimingObserver::new();
        pipeline.summarize_text(BODY, SummaryLength::Low, &mut observer);

        let stages: Vec<&str> = observer.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            stages,
            vec![
                STAGE_SEGMENT,
                STAGE_FREQUENCIES,
                STAGE_TF,
                STAGE_IDF,
                STAGE_TFIDF,
                STAGE_SCORE,
                STAGE_SELECT,
            ]
        );
    }

    #[test]
    fn test_observer_item_counts() {
        let pipeline = SummaryPipeline::new();
        let mut observer = StageTimingObserver::new();
        pipeline.summarize_text(BODY, SummaryLength::Low, &mut observer);

        let (_, segment_report) = &observer.reports()[0];
        assert_eq!(segment_report.items(), Some(5));
        let (_, select_report) = &observer.reports()[6];
        assert_eq!(select_report.items(), Some(3));
    }

    #[test]
    fn test_summarize_url_swallows_bad_url() {
        let pipeline = SummaryPipeline::new();
        let output = pipeline.summarize_url("not a url", SummaryLength::Low, &mut NoopObserver);
        assert_eq!(output.article, Article::fallback());
        assert_eq!(output.summary, ".");
    }

    #[test]
    fn test_selection_order_is_source_order() {
        let pipeline = SummaryPipeline::new();
        let summary = pipeline.summarize_text(BODY, SummaryLength::Medium, &mut NoopObserver);
        // Medium budget (5) covers the whole corpus; order must match input.
        let cats = summary.find("Cats are mammals").unwrap();
        let oxygen = summary.find("Mammals need oxygen").unwrap();
        assert!(cats < oxygen);
    }
}
