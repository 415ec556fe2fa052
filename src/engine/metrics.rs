//! Engine run metrics.
//!
//! `Engine::run` is the normal path; `Engine::run_with_metrics` additionally
//! records where the time went and how much the finalizer had to clean up.
//! The counters are mostly useful when checking why a pattern produced fewer
//! dates than expected (cap hit, duplicates on boundary weeks).

use chrono::NaiveDate;
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for [`Engine::run_with_metrics`](super::Engine::run_with_metrics).
    pub total: Duration,
    /// Time spent in the frequency-specific generator.
    pub generate: Duration,
    /// Time spent sorting, deduplicating and capping.
    pub finalize: Duration,
    /// Raw candidates emitted by the generator.
    pub candidates: usize,
    /// Same-day duplicates dropped by the finalizer.
    pub duplicates_removed: usize,
    /// Dates dropped by the final cap.
    pub truncated: usize,
}

/// Generated dates bundled with run metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub dates: Vec<NaiveDate>,
    pub metrics: RunMetrics,
}
