use thiserror::Error;

use crate::recurrence::Frequency;

/// Reasons a [`DateRange`](crate::DateRange) cannot be used for generation.
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    #[error("Start date is required")]
    MissingStart,

    #[error("Invalid start date")]
    InvalidStart,

    #[error("Invalid end date")]
    InvalidEnd,

    #[error("End date must be after start date")]
    EndBeforeStart,
}

/// Out-of-range recurrence parameters reported by
/// [`RecurrenceSettings::validate`](crate::RecurrenceSettings::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("{frequency} interval must be between 1 and {max}, got {interval}")]
    IntervalOutOfRange { frequency: Frequency, interval: u32, max: u32 },

    #[error("Day of month must be between 1 and 31, got {0}")]
    DayOfMonthOutOfRange(u32),

    #[error("Week of month must be between 0 and 5, got {0}")]
    WeekOfMonthOutOfRange(u8),

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    WeekdayOutOfRange(u8),

    #[error("Month must be between 0 (January) and 11 (December), got {0}")]
    MonthOutOfRange(u32),

    #[error("Day {day} does not exist in {month}; expected 1-{max}")]
    DayOutOfRangeForMonth { month: &'static str, day: u32, max: u32 },
}

pub type SpecResult<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_render_user_messages() {
        assert_eq!(RangeError::MissingStart.to_string(), "Start date is required");
        assert_eq!(RangeError::InvalidStart.to_string(), "Invalid start date");
        assert_eq!(RangeError::InvalidEnd.to_string(), "Invalid end date");
        assert_eq!(RangeError::EndBeforeStart.to_string(), "End date must be after start date");
    }

    #[test]
    fn interval_error_names_the_frequency() {
        let err = SpecError::IntervalOutOfRange { frequency: Frequency::Weekly, interval: 60, max: 52 };
        assert_eq!(err.to_string(), "weekly interval must be between 1 and 52, got 60");
    }

    #[test]
    fn spec_errors_read_as_statements() {
        assert_eq!(SpecError::DayOfMonthOutOfRange(32).to_string(), "Day of month must be between 1 and 31, got 32");
        assert_eq!(SpecError::MonthOutOfRange(12).to_string(), "Month must be between 0 (January) and 11 (December), got 12");
    }
}
