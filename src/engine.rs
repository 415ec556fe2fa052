//! Generation engine.
//!
//! The public functions in `api.rs` are thin wrappers; the work happens here
//! in three steps:
//!
//! ```text
//! DateRange ── DateRange::resolve ──▶ Window          (range.rs)
//!                                        │
//! RecurrenceSpec ───────────────────────┤
//!                                        v
//!                     candidates (dispatch.rs)
//!                       - one generator per frequency (rules/*.rs)
//!                       - each stops at MAX_OCCURRENCES emissions
//!                                        │
//!                                        v
//!                     finalize (finalize.rs)
//!                       - sort ascending
//!                       - drop same-day duplicates
//!                       - truncate to MAX_OCCURRENCES
//!                                        │
//!                                        v
//!                                 Vec<NaiveDate>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `dispatch.rs`: picks the generator for a spec and feeds it the options it
//!   needs (overflow policies).
//! - `finalize.rs`: turns raw candidates into a sequence that is strictly
//!   ascending and capped, whatever order the generator emitted.
//! - `metrics.rs`: optional timing and counters for a run.
//!
//! The engine holds no state: the same spec, window and options always produce
//! the same output.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/finalize.rs"]
mod finalize;
#[path = "engine/metrics.rs"]
mod metrics;

use chrono::NaiveDate;
use std::time::Instant;

use crate::api::Options;
use crate::range::Window;
use crate::recurrence::RecurrenceSpec;

pub use metrics::{RunMetrics, RunResult};

/// One generation pass over a resolved window.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    spec: &'a RecurrenceSpec,
    options: &'a Options,
}

impl<'a> Engine<'a> {
    pub fn new(spec: &'a RecurrenceSpec, options: &'a Options) -> Self {
        Engine { spec, options }
    }

    pub fn run(&self, window: Window) -> Vec<NaiveDate> {
        let raw = dispatch::candidates(self.spec, window, self.options);
        finalize::finalize(raw).dates
    }

    pub fn run_with_metrics(&self, window: Window) -> RunResult {
        let started = Instant::now();
        let raw = dispatch::candidates(self.spec, window, self.options);
        let generate = started.elapsed();

        let candidates = raw.len();
        let finalize_started = Instant::now();
        let finalized = finalize::finalize(raw);
        let finalize = finalize_started.elapsed();

        RunResult {
            dates: finalized.dates,
            metrics: RunMetrics {
                total: started.elapsed(),
                generate,
                finalize,
                candidates,
                duplicates_removed: finalized.duplicates_removed,
                truncated: finalized.truncated,
            },
        }
    }
}
