//! Human-readable pattern summaries.
//!
//! Everything that shows a pattern to a user should go through [`describe`]
//! so the wording stays identical across screens.

use chrono::Weekday;

use crate::recurrence::{MonthlyPattern, RecurrenceSpec, WeekOfMonth};
use crate::rules::helpers::ordinal_suffix;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// English name for a zero-based month index, `January` when out of range.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or(MONTH_NAMES[0])
}

fn week_label(week: WeekOfMonth) -> &'static str {
    match week {
        WeekOfMonth::First => "First",
        WeekOfMonth::Second => "Second",
        WeekOfMonth::Third => "Third",
        WeekOfMonth::Fourth => "Fourth",
        WeekOfMonth::Last => "Last",
    }
}

/// Render `spec` as a short sentence.
///
/// ```text
/// Daily    "Every day" | "Every 3 days"
/// Weekly   "Every week" | "Every 2 weeks" [+ " on Monday, Friday"]
/// Monthly  "Day 15 of every 1 month" | "Second Tuesday of every 1 month"
/// Yearly   "December 25th every 1 year" | "... every 2 years"
/// ```
///
/// An interval of 0 reads as 1 and a day of 0 as the 1st.
///
/// # Example
/// ```
/// use chrono::Weekday;
/// use recurra::{RecurrenceSpec, WeekOfMonth, describe};
///
/// let spec = RecurrenceSpec::monthly_on_weekday(1, WeekOfMonth::Second, Weekday::Tue);
/// assert_eq!(describe(&spec), "Second Tuesday of every 1 month");
/// ```
pub fn describe(spec: &RecurrenceSpec) -> String {
    let interval = spec.interval();
    match spec {
        RecurrenceSpec::Daily { .. } => {
            if interval == 1 {
                "Every day".to_string()
            } else {
                format!("Every {interval} days")
            }
        }
        RecurrenceSpec::Weekly { days, .. } => {
            let mut out = if interval == 1 { "Every week".to_string() } else { format!("Every {interval} weeks") };
            let names: Vec<&str> = days.weekdays().map(weekday_name).collect();
            if !names.is_empty() {
                out.push_str(" on ");
                out.push_str(&names.join(", "));
            }
            out
        }
        RecurrenceSpec::Monthly { pattern: MonthlyPattern::DayOfMonth(day), .. } => {
            format!("Day {} of every {interval} month", (*day).max(1))
        }
        RecurrenceSpec::Monthly { pattern: MonthlyPattern::NthWeekday { week, weekday }, .. } => {
            format!("{} {} of every {interval} month", week_label(*week), weekday_name(*weekday))
        }
        RecurrenceSpec::Yearly { month, day, .. } => {
            let day = (*day).max(1);
            let unit = if interval == 1 { "year" } else { "years" };
            format!("{} {day}{} every {interval} {unit}", month_name(*month), ordinal_suffix(day))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::WeekdaySet;

    #[test]
    fn daily_summaries() {
        assert_eq!(describe(&RecurrenceSpec::daily(1)), "Every day");
        assert_eq!(describe(&RecurrenceSpec::daily(3)), "Every 3 days");
        assert_eq!(describe(&RecurrenceSpec::daily(0)), "Every day");
    }

    #[test]
    fn weekly_summaries_list_days_in_order() {
        assert_eq!(describe(&RecurrenceSpec::weekly(1, WeekdaySet::empty())), "Every week");
        let days = WeekdaySet::FRIDAY | WeekdaySet::MONDAY | WeekdaySet::WEDNESDAY;
        assert_eq!(describe(&RecurrenceSpec::weekly(2, days)), "Every 2 weeks on Monday, Wednesday, Friday");
        assert_eq!(
            describe(&RecurrenceSpec::weekly(1, WeekdaySet::SATURDAY | WeekdaySet::SUNDAY)),
            "Every week on Sunday, Saturday"
        );
    }

    #[test]
    fn monthly_summaries() {
        assert_eq!(describe(&RecurrenceSpec::monthly_on_day(1, 15)), "Day 15 of every 1 month");
        assert_eq!(describe(&RecurrenceSpec::monthly_on_day(3, 0)), "Day 1 of every 3 month");
        assert_eq!(
            describe(&RecurrenceSpec::monthly_on_weekday(1, WeekOfMonth::Second, Weekday::Tue)),
            "Second Tuesday of every 1 month"
        );
        assert_eq!(
            describe(&RecurrenceSpec::monthly_on_weekday(2, WeekOfMonth::Last, Weekday::Fri)),
            "Last Friday of every 2 month"
        );
    }

    #[test]
    fn yearly_summaries_use_ordinals() {
        assert_eq!(describe(&RecurrenceSpec::yearly(1, 11, 25)), "December 25th every 1 year");
        assert_eq!(describe(&RecurrenceSpec::yearly(2, 0, 1)), "January 1st every 2 years");
        assert_eq!(describe(&RecurrenceSpec::yearly(1, 2, 22)), "March 22nd every 1 year");
        assert_eq!(describe(&RecurrenceSpec::yearly(1, 6, 13)), "July 13th every 1 year");
        assert_eq!(describe(&RecurrenceSpec::yearly(1, 40, 3)), "January 3rd every 1 year");
    }
}
