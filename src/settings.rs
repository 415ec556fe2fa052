//! The flat, form-shaped description of a pattern.
//!
//! Input widgets edit one field at a time, so callers usually hold a
//! [`RecurrenceSettings`] (all frequencies' fields side by side) and convert it
//! to a [`RecurrenceSpec`] when generating. The JSON shape uses the camelCase
//! field names, e.g. `{"everyXWeeks": 2, "daysOfWeek": [1, 3, 5]}`.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::recurrence::{Frequency, MonthlyPattern, RecurrenceSpec, WeekOfMonth, WeekdaySet, weekday_from_index};
use crate::summary::month_name;

/// Longest possible length of each month, February counted as 29.
const MAX_DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurrenceSettings {
    pub every_x_days: u32,

    pub every_x_weeks: u32,
    /// Sunday-based weekday indices. Empty means "the start date's weekday".
    pub days_of_week: Vec<u8>,

    pub every_x_months: u32,
    pub day_of_month: u32,
    /// `0` selects day-of-month mode, `1..=4` the nth weekday, `5` the last.
    pub week_of_month: u8,
    pub day_of_week: u8,

    pub every_x_years: u32,
    /// Zero-based (0 = January).
    pub month: u32,
    pub day: u32,
}

impl Default for RecurrenceSettings {
    fn default() -> Self {
        RecurrenceSettings {
            every_x_days: 1,
            every_x_weeks: 1,
            days_of_week: Vec::new(),
            every_x_months: 1,
            day_of_month: 1,
            week_of_month: 1,
            day_of_week: 0,
            every_x_years: 1,
            month: 0,
            day: 1,
        }
    }
}

impl RecurrenceSettings {
    pub fn interval(&self, frequency: Frequency) -> u32 {
        match frequency {
            Frequency::Daily => self.every_x_days,
            Frequency::Weekly => self.every_x_weeks,
            Frequency::Monthly => self.every_x_months,
            Frequency::Yearly => self.every_x_years,
        }
    }

    pub fn set_interval(&mut self, frequency: Frequency, interval: u32) {
        match frequency {
            Frequency::Daily => self.every_x_days = interval,
            Frequency::Weekly => self.every_x_weeks = interval,
            Frequency::Monthly => self.every_x_months = interval,
            Frequency::Yearly => self.every_x_years = interval,
        }
    }

    /// Switch monthly patterns to a fixed day, clearing the weekday pattern.
    pub fn set_day_of_month(&mut self, day: u32) {
        self.day_of_month = day;
        self.week_of_month = 0;
        self.day_of_week = 0;
    }

    /// Switch monthly patterns to the nth weekday, clearing the fixed day.
    pub fn set_week_pattern(&mut self, week_of_month: u8, day_of_week: u8) {
        self.week_of_month = week_of_month;
        self.day_of_week = day_of_week;
        self.day_of_month = 1;
    }

    /// Add `day` to the weekly selection, or remove it if already selected.
    pub fn toggle_weekday(&mut self, day: u8) {
        if let Some(pos) = self.days_of_week.iter().position(|d| *d == day) {
            self.days_of_week.remove(pos);
        } else {
            self.days_of_week.push(day);
            self.days_of_week.sort_unstable();
        }
    }

    /// Build the typed pattern for `frequency`.
    ///
    /// The conversion never fails: an interval or day of 0 becomes 1, an
    /// unknown week of month becomes `First`, an unknown weekday becomes
    /// Sunday, and weekday indices above 6 are dropped. Use [`validate`] to
    /// surface those problems to the user.
    ///
    /// [`validate`]: RecurrenceSettings::validate
    pub fn to_spec(&self, frequency: Frequency) -> RecurrenceSpec {
        let interval = self.interval(frequency).max(1);
        match frequency {
            Frequency::Daily => RecurrenceSpec::daily(interval),
            Frequency::Weekly => {
                RecurrenceSpec::weekly(interval, WeekdaySet::from_indices(self.days_of_week.iter().copied()))
            }
            Frequency::Monthly => {
                let pattern = if self.week_of_month == 0 {
                    MonthlyPattern::DayOfMonth(self.day_of_month.max(1))
                } else {
                    MonthlyPattern::NthWeekday {
                        week: WeekOfMonth::from_index(self.week_of_month).unwrap_or(WeekOfMonth::First),
                        weekday: weekday_from_index(self.day_of_week).unwrap_or(chrono::Weekday::Sun),
                    }
                };
                RecurrenceSpec::Monthly { interval, pattern }
            }
            Frequency::Yearly => RecurrenceSpec::yearly(interval, self.month, self.day.max(1)),
        }
    }

    /// Check the fields used by `frequency` against their allowed ranges.
    pub fn validate(&self, frequency: Frequency) -> SpecResult<()> {
        let interval = self.interval(frequency);
        let max = frequency.max_interval();
        if !(1..=max).contains(&interval) {
            return Err(SpecError::IntervalOutOfRange { frequency, interval, max });
        }

        match frequency {
            Frequency::Daily => Ok(()),
            Frequency::Weekly => match self.days_of_week.iter().find(|d| **d > 6) {
                Some(day) => Err(SpecError::WeekdayOutOfRange(*day)),
                None => Ok(()),
            },
            Frequency::Monthly => match self.week_of_month {
                0 if !(1..=31).contains(&self.day_of_month) => Err(SpecError::DayOfMonthOutOfRange(self.day_of_month)),
                0 => Ok(()),
                1..=5 if self.day_of_week > 6 => Err(SpecError::WeekdayOutOfRange(self.day_of_week)),
                1..=5 => Ok(()),
                week => Err(SpecError::WeekOfMonthOutOfRange(week)),
            },
            Frequency::Yearly => {
                let max = *MAX_DAYS_IN_MONTH.get(self.month as usize).ok_or(SpecError::MonthOutOfRange(self.month))?;
                if (1..=max).contains(&self.day) {
                    Ok(())
                } else {
                    Err(SpecError::DayOutOfRangeForMonth { month: month_name(self.month), day: self.day, max })
                }
            }
        }
    }
}
