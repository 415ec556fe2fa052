use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// Span used when a range has no end date.
pub const DEFAULT_SPAN: Months = Months::new(12);

/// The user-supplied `{start, end}` window, as raw date strings.
///
/// Blank strings count as absent. The end date is optional; generation falls
/// back to one year after the start without writing that value back here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A resolved, ordered window of calendar dates (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl DateRange {
    pub fn new(start: impl Into<String>) -> Self {
        DateRange { start: Some(start.into()), end: None }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn from_dates(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        DateRange { start: Some(start.to_string()), end: end.map(|d| d.to_string()) }
    }

    /// Check the range and resolve it into a [`Window`].
    ///
    /// Checks run in order and the first failure wins: missing start, bad
    /// start, bad end, end before start.
    pub fn resolve(&self) -> Result<Window, RangeError> {
        let start = non_blank(&self.start).ok_or(RangeError::MissingStart)?;
        let start = parse_date(start).ok_or(RangeError::InvalidStart)?;

        let end = match non_blank(&self.end) {
            Some(raw) => {
                let end = parse_date(raw).ok_or(RangeError::InvalidEnd)?;
                if end < start {
                    return Err(RangeError::EndBeforeStart);
                }
                end
            }
            None => default_end(start),
        };

        Ok(Window { start, end })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn default_end(start: NaiveDate) -> NaiveDate {
    start.checked_add_months(DEFAULT_SPAN).unwrap_or(NaiveDate::MAX)
}

/// Parse an ISO calendar date (`YYYY-MM-DD`), tolerating a trailing time part.
///
/// Only the calendar day is kept. Impossible days such as `2024-02-30` are
/// rejected.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let caps = regex!(r"^\s*(\d{4})-(\d{2})-(\d{2})(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?\s*$")
        .captures(input)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
