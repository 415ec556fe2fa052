use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::engine::Engine;
use crate::error::RangeError;
use crate::range::{DateRange, Window};
use crate::recurrence::RecurrenceSpec;

pub use crate::summary::describe;

/// What to do when an anchor day does not exist in a target month
/// (day 31 in April, February 29 in a common year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOverflow {
    /// Leave that month (or year) out.
    #[default]
    Skip,
    /// Use the last day of the month instead.
    Clamp,
    /// Count past the end of the month into the next one.
    RollOver,
}

impl DayOverflow {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "skip" => Some(DayOverflow::Skip),
            "clamp" => Some(DayOverflow::Clamp),
            "rollover" | "roll-over" => Some(DayOverflow::RollOver),
            _ => None,
        }
    }
}

/// Options that affect generation.
///
/// Both policies default to [`DayOverflow::Skip`]: a pattern anchored on the
/// 31st simply has no occurrence in shorter months, and a February 29
/// anniversary only recurs in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Policy for monthly day-of-month patterns.
    pub month_day_overflow: DayOverflow,
    /// Policy for yearly anchors missing from the target year.
    pub leap_day_overflow: DayOverflow,
}

/// Compact run details returned by [`generate_verbose_with`].
#[derive(Debug, Clone)]
pub struct GenerationDetails {
    /// The resolved window the dates were generated for.
    pub window: Window,
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in the generator.
    pub generate: Duration,
    /// Time spent finalizing (sort, dedup, cap).
    pub finalize: Duration,
    /// Raw candidates before finalizing.
    pub candidates: usize,
    pub duplicates_removed: usize,
    pub truncated: usize,
}

/// Result from [`generate_verbose`] and [`generate_verbose_with`].
///
/// `error` is set when the range could not be used; `dates` is then empty and
/// `details` is `None`.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dates: Vec<NaiveDate>,
    pub error: Option<RangeError>,
    pub details: Option<GenerationDetails>,
}

/// Check `range` without generating anything.
///
/// # Example
/// ```
/// use recurra::{DateRange, RangeError, validate_range};
///
/// assert_eq!(validate_range(&DateRange::default()), Err(RangeError::MissingStart));
/// assert!(validate_range(&DateRange::new("2024-01-15")).is_ok());
/// ```
pub fn validate_range(range: &DateRange) -> Result<(), RangeError> {
    range.resolve().map(|_| ())
}

/// Generate dates for `spec` within `range` using default [`Options`].
///
/// Returns an empty sequence when the range is unusable (missing or bad
/// start, bad end, end before start). Call [`validate_range`] to find out
/// which.
pub fn generate(spec: &RecurrenceSpec, range: &DateRange) -> Vec<NaiveDate> {
    generate_with(spec, range, &Options::default())
}

/// Generate dates for `spec` within `range` using explicit `options`.
#[tracing::instrument(level = "debug", skip_all, fields(frequency = %spec.frequency(), interval = spec.interval()))]
pub fn generate_with(spec: &RecurrenceSpec, range: &DateRange, options: &Options) -> Vec<NaiveDate> {
    let window = match range.resolve() {
        Ok(window) => window,
        Err(error) => {
            tracing::debug!(%error, "range rejected, nothing to generate");
            return Vec::new();
        }
    };

    let dates = Engine::new(spec, options).run(window);
    tracing::debug!(count = dates.len(), start = %window.start, end = %window.end, "generated dates");
    dates
}

/// Like [`generate_verbose_with`] with default [`Options`].
pub fn generate_verbose(spec: &RecurrenceSpec, range: &DateRange) -> GenerationResult {
    generate_verbose_with(spec, range, &Options::default())
}

/// Generate dates and report the validation outcome plus run details.
///
/// This is the `{ sequence, error }` shape used by the CLI. The plain
/// [`generate_with`] path does not collect timings.
#[tracing::instrument(level = "debug", skip_all, fields(frequency = %spec.frequency(), interval = spec.interval()))]
pub fn generate_verbose_with(spec: &RecurrenceSpec, range: &DateRange, options: &Options) -> GenerationResult {
    let window = match range.resolve() {
        Ok(window) => window,
        Err(error) => {
            tracing::debug!(%error, "range rejected, nothing to generate");
            return GenerationResult { dates: Vec::new(), error: Some(error), details: None };
        }
    };

    let run = Engine::new(spec, options).run_with_metrics(window);
    tracing::debug!(
        count = run.dates.len(),
        candidates = run.metrics.candidates,
        truncated = run.metrics.truncated,
        "generated dates"
    );

    let details = GenerationDetails {
        window,
        total: run.metrics.total,
        generate: run.metrics.generate,
        finalize: run.metrics.finalize,
        candidates: run.metrics.candidates,
        duplicates_removed: run.metrics.duplicates_removed,
        truncated: run.metrics.truncated,
    };

    GenerationResult { dates: run.dates, error: None, details: Some(details) }
}
