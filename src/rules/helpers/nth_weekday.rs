use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::boundaries::end_of_month;
use crate::recurrence::WeekOfMonth;

/// The `week`-th occurrence of `weekday` in `month` (1-12) of `year`.
///
/// `Last` steps back from the month's final day to the nearest matching
/// weekday. The other variants step forward from the first matching weekday
/// by whole weeks; since the 4th occurrence always falls on or before the 28th,
/// the result never leaves the month.
pub fn nth_weekday_of_month(year: i32, month: u32, week: WeekOfMonth, weekday: Weekday) -> Option<NaiveDate> {
    let target = weekday.num_days_from_sunday();

    if week == WeekOfMonth::Last {
        let last = end_of_month(year, month)?;
        let back = (last.weekday().num_days_from_sunday() + 7 - target) % 7;
        return last.checked_sub_days(Days::new(u64::from(back)));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let forward = (target + 7 - first.weekday().num_days_from_sunday()) % 7;
    let weeks = u32::from(week.index() - 1);
    first.checked_add_days(Days::new(u64::from(forward + weeks * 7)))
}
