//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and emitting structured
//! telemetry. Pass [`NoopObserver`] for zero-overhead execution.

use std::time::{Duration, Instant};

/// Stage names, in execution order.
pub const STAGE_EXTRACT: &str = "extract";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_TF: &str = "tf";
pub const STAGE_IDF: &str = "idf";
pub const STAGE_TFIDF: &str = "tfidf";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for one stage.
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Per-stage execution report.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Report with an item count (sentences, records, selections).
    pub fn with_items(elapsed: Duration, items: usize) -> Self {
        Self {
            elapsed,
            items: Some(items),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks at stage boundaries. All methods default to no-ops so
/// implementations override only what they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that does nothing.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a `(stage, report)` pair per completed stage.
#[derive(Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
