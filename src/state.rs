//! Caller-owned editing state.
//!
//! A form that lets a user build a pattern needs somewhere to keep the current
//! range, frequency and settings between edits. [`RecurrenceState`] is that
//! place: the caller owns it and passes it around explicitly, and the engine
//! stays a set of pure functions. The last generated sequence is cached and
//! only recomputed when the inputs it was built from change.

use chrono::NaiveDate;

use crate::api::{Options, generate_with};
use crate::error::{RangeError, SpecResult};
use crate::range::DateRange;
use crate::recurrence::{Frequency, RecurrenceSpec};
use crate::settings::RecurrenceSettings;
use crate::summary::describe;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    spec: RecurrenceSpec,
    range: DateRange,
    options: Options,
}

#[derive(Debug, Clone, Default)]
pub struct RecurrenceState {
    pub range: DateRange,
    pub frequency: Frequency,
    pub settings: RecurrenceSettings,
    pub options: Options,
    cached: Option<(CacheKey, Vec<NaiveDate>)>,
    #[cfg(test)]
    regenerations: usize,
}

impl RecurrenceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start(&mut self, start: impl Into<String>) {
        self.range.start = Some(start.into());
    }

    pub fn set_end(&mut self, end: impl Into<String>) {
        self.range.end = Some(end.into());
    }

    pub fn clear_end(&mut self) {
        self.range.end = None;
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    /// Edit the settings in place, e.g. `state.update_settings(|s| s.set_day_of_month(15))`.
    pub fn update_settings(&mut self, edit: impl FnOnce(&mut RecurrenceSettings)) {
        edit(&mut self.settings);
    }

    /// The typed pattern for the current frequency and settings.
    pub fn spec(&self) -> RecurrenceSpec {
        self.settings.to_spec(self.frequency)
    }

    /// Range check, as shown next to the date inputs.
    pub fn validate(&self) -> Result<(), RangeError> {
        self.range.resolve().map(|_| ())
    }

    /// Parameter check for the current frequency's settings.
    pub fn validate_settings(&self) -> SpecResult<()> {
        self.settings.validate(self.frequency)
    }

    pub fn summary(&self) -> String {
        describe(&self.spec())
    }

    /// Generate (or reuse) the sequence for the current inputs.
    pub fn generate(&mut self) -> &[NaiveDate] {
        let key = CacheKey { spec: self.spec(), range: self.range.clone(), options: self.options };

        let fresh = match self.cached.take() {
            Some((cached_key, dates)) if cached_key == key => {
                tracing::trace!("reusing cached sequence");
                (cached_key, dates)
            }
            _ => {
                tracing::trace!("inputs changed, regenerating");
                #[cfg(test)]
                {
                    self.regenerations += 1;
                }
                let dates = generate_with(&key.spec, &key.range, &key.options);
                (key, dates)
            }
        };

        &self.cached.insert(fresh).1
    }

    /// The last generated sequence, empty if nothing was generated yet.
    pub fn dates(&self) -> &[NaiveDate] {
        self.cached.as_ref().map(|(_, dates)| dates.as_slice()).unwrap_or(&[])
    }

    /// Reset every field to its initial value and drop the cached sequence.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
