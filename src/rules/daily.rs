//! Every N days.

use chrono::NaiveDate;

use crate::MAX_OCCURRENCES;
use crate::range::Window;
use crate::rules::helpers::add_days;

/// `start`, `start + interval`, ... up to the window end.
pub fn candidates(window: Window, interval: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = Some(window.start);

    while let Some(date) = cursor.filter(|d| *d <= window.end) {
        if out.len() >= MAX_OCCURRENCES {
            break;
        }
        out.push(date);
        cursor = add_days(date, interval);
    }

    out
}
