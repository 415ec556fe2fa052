//! Every N years on a fixed month and day.

use chrono::{Datelike, NaiveDate};

use crate::MAX_OCCURRENCES;
use crate::api::DayOverflow;
use crate::range::Window;
use crate::rules::helpers::{add_years, day_in_month, start_of_year};

/// `month` is zero-based (0 = January). Months outside 0-11 never match.
pub fn candidates(window: Window, interval: u32, month: u32, day: u32, overflow: DayOverflow) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    if month > 11 {
        return out;
    }

    let mut cursor = Some(start_of_year(window.start));
    while let Some(year) = cursor.filter(|y| *y <= window.end) {
        if out.len() >= MAX_OCCURRENCES {
            break;
        }

        if let Some(date) = day_in_month(year.year(), month + 1, day, overflow).filter(|d| window.contains(*d)) {
            out.push(date);
        }

        cursor = add_years(year, interval);
    }

    out
}
