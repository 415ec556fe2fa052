//! A deterministic recurrence rule engine.
//!
//! Given a [`RecurrenceSpec`] (daily, weekly, monthly or yearly, with an
//! interval and type-specific anchors) and a [`DateRange`], the engine
//! produces a bounded, strictly ascending list of calendar dates and,
//! independently, a human-readable summary of the pattern.
//!
//! ```
//! use recurra::{DateRange, RecurrenceSpec, describe, generate};
//!
//! let spec = RecurrenceSpec::daily(3);
//! let range = DateRange::new("2024-01-15").with_end("2024-01-21");
//!
//! let dates: Vec<String> = generate(&spec, &range).iter().map(|d| d.to_string()).collect();
//! assert_eq!(dates, ["2024-01-15", "2024-01-18", "2024-01-21"]);
//! assert_eq!(describe(&spec), "Every 3 days");
//! ```
//!
//! Every call is a pure function of its inputs. Callers that want to keep the
//! current pattern around between edits can use [`RecurrenceState`], which
//! owns the inputs and caches the last generated sequence.

#[macro_use]
mod macros;
mod api;
mod calendar;
mod engine;
mod error;
mod range;
mod recurrence;
mod rules;
mod settings;
mod state;
mod summary;

pub use api::{
    DayOverflow, GenerationDetails, GenerationResult, Options, describe, generate, generate_verbose,
    generate_verbose_with, generate_with, validate_range,
};
pub use calendar::{CalendarCell, CellMarker, MonthGrid};
pub use error::{RangeError, SpecError, SpecResult};
pub use range::{DEFAULT_SPAN, DateRange, Window, parse_date};
pub use recurrence::{Frequency, MonthlyPattern, RecurrenceSpec, WeekOfMonth, WeekdaySet, weekday_from_index};
pub use settings::RecurrenceSettings;
pub use state::RecurrenceState;
pub use summary::{month_name, weekday_name};

/// Hard upper bound on the length of any generated sequence.
pub const MAX_OCCURRENCES: usize = 100;
