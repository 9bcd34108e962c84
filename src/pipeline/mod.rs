//! Pipeline orchestration
//!
//! This module provides the end-to-end runner and the stage observer hooks.

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{SummaryOutput, SummaryPipeline};
