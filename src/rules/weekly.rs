//! Every N weeks on a set of weekdays.
//!
//! The cursor moves over Sunday-aligned week blocks rather than single days,
//! so a multi-weekday pattern is evaluated one whole week at a time.

use chrono::{Datelike, NaiveDate};

use crate::MAX_OCCURRENCES;
use crate::range::Window;
use crate::recurrence::WeekdaySet;
use crate::rules::helpers::{add_days, start_of_week};

/// Dates on `days` (or the start date's weekday when `days` is empty) in
/// every `interval`-th week, beginning with the week containing the start.
pub fn candidates(window: Window, interval: u32, days: WeekdaySet) -> Vec<NaiveDate> {
    let days = days.or_weekday(window.start.weekday());
    let step = interval.saturating_mul(7);

    let mut out = Vec::new();
    let mut cursor = Some(start_of_week(window.start));

    while let Some(week_start) = cursor.filter(|w| *w <= window.end) {
        if out.len() >= MAX_OCCURRENCES {
            break;
        }

        let week_end = add_days(week_start, 6).unwrap_or(NaiveDate::MAX);
        let lower = window.start.max(week_start);
        for weekday in days.weekdays() {
            let Some(date) = add_days(week_start, weekday.num_days_from_sunday()) else {
                continue;
            };
            if date >= lower && date <= week_end && window.contains(date) {
                out.push(date);
            }
        }

        cursor = add_days(week_start, step);
    }

    out
}
