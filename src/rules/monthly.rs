//! Every N months, on a fixed day or on the nth weekday.

use chrono::{Datelike, NaiveDate};

use crate::MAX_OCCURRENCES;
use crate::api::DayOverflow;
use crate::range::Window;
use crate::recurrence::MonthlyPattern;
use crate::rules::helpers::{add_months, day_in_month, nth_weekday_of_month, start_of_month};

/// One candidate per `interval`-th month, starting with the start date's month.
///
/// The cursor sits on the first of each month so every month that overlaps the
/// window is considered, whatever day of the month the window starts on.
pub fn candidates(window: Window, interval: u32, pattern: MonthlyPattern, overflow: DayOverflow) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = Some(start_of_month(window.start));

    while let Some(month) = cursor.filter(|m| *m <= window.end) {
        if out.len() >= MAX_OCCURRENCES {
            break;
        }

        let candidate = match pattern {
            MonthlyPattern::DayOfMonth(day) => day_in_month(month.year(), month.month(), day, overflow),
            MonthlyPattern::NthWeekday { week, weekday } => {
                nth_weekday_of_month(month.year(), month.month(), week, weekday)
            }
        };
        if let Some(date) = candidate.filter(|d| window.contains(*d)) {
            out.push(date);
        }

        cursor = add_months(month, interval);
    }

    out
}
