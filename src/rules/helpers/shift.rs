use chrono::{Datelike, Days, Months, NaiveDate};

use super::boundaries::end_of_month;
use crate::api::DayOverflow;

pub fn add_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}

/// Advance by whole months. The day is clamped to the target month's length
/// (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    end_of_month(year, month).map(|last| last.day())
}

/// Build `year-month-day`, applying `overflow` when the month is too short.
///
/// `month` is 1-based here. `RollOver` counts forward from the first of the
/// month, so day 31 in a 30-day month lands on the 1st of the next month.
pub fn day_in_month(year: i32, month: u32, day: u32, overflow: DayOverflow) -> Option<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Some(date);
    }
    match overflow {
        DayOverflow::Skip => None,
        DayOverflow::Clamp => {
            let last = days_in_month(year, month)?;
            NaiveDate::from_ymd_opt(year, month, day.clamp(1, last))
        }
        DayOverflow::RollOver => {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            match day.checked_sub(1) {
                Some(offset) => add_days(first, offset),
                None => first.pred_opt(),
            }
        }
    }
}
