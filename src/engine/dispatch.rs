//! Pattern → generator dispatch.
//!
//! ```text
//! RecurrenceSpec ──┬─ Daily    -> rules::daily
//!                  ├─ Weekly   -> rules::weekly
//!                  ├─ Monthly  -> rules::monthly  (month_day_overflow)
//!                  └─ Yearly   -> rules::yearly   (leap_day_overflow)
//! ```
//!
//! Generators return raw candidates: possibly unsorted, possibly with
//! duplicates. `finalize` cleans them up.

use chrono::NaiveDate;

use crate::api::Options;
use crate::range::Window;
use crate::recurrence::RecurrenceSpec;
use crate::rules::{daily, monthly, weekly, yearly};

pub(crate) fn candidates(spec: &RecurrenceSpec, window: Window, options: &Options) -> Vec<NaiveDate> {
    let interval = spec.interval();
    match spec {
        RecurrenceSpec::Daily { .. } => daily::candidates(window, interval),
        RecurrenceSpec::Weekly { days, .. } => weekly::candidates(window, interval, *days),
        RecurrenceSpec::Monthly { pattern, .. } => {
            monthly::candidates(window, interval, *pattern, options.month_day_overflow)
        }
        RecurrenceSpec::Yearly { month, day, .. } => {
            yearly::candidates(window, interval, *month, *day, options.leap_day_overflow)
        }
    }
}
