//! Month grid model for calendar previews.
//!
//! A [`MonthGrid`] is the data behind a Sunday-first month view: whole weeks,
//! padded with days from the neighbouring months, each cell tagged with what a
//! preview should highlight. Drawing it is up to the caller.

use chrono::{Datelike, Days, NaiveDate};

use crate::range::{DateRange, parse_date};
use crate::rules::helpers::{add_months, end_of_month};
use crate::summary::month_name;

/// What a cell should be highlighted as. In-month cells only; padding cells
/// are always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMarker {
    None,
    Start,
    End,
    Occurrence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for padding days from the previous or next month.
    pub in_month: bool,
    pub marker: CellMarker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Lay out `month` (1-12) of `year`.
    ///
    /// `dates` is a generated sequence (ascending, as returned by
    /// [`generate`](crate::generate)). Start and end markers come from the
    /// dates the user actually entered in `range`; a defaulted end date is
    /// not marked. When several markers apply, `Start` wins over `End`, which
    /// wins over `Occurrence`.
    pub fn build(year: i32, month: u32, dates: &[NaiveDate], range: &DateRange) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = end_of_month(year, month)?;
        let start = range.start.as_deref().and_then(parse_date);
        let end = range.end.as_deref().and_then(parse_date);

        let leading = u64::from(first.weekday().num_days_from_sunday());
        let in_month = u64::from(last.day());
        let trailing = (7 - (leading + in_month) % 7) % 7;

        let origin = first.checked_sub_days(Days::new(leading))?;
        let cells = (0..leading + in_month + trailing)
            .map(|offset| {
                let date = origin.checked_add_days(Days::new(offset))?;
                let in_month = date.month() == month && date.year() == year;
                let marker = if !in_month {
                    CellMarker::None
                } else if start == Some(date) {
                    CellMarker::Start
                } else if end == Some(date) {
                    CellMarker::End
                } else if dates.binary_search(&date).is_ok() {
                    CellMarker::Occurrence
                } else {
                    CellMarker::None
                };
                Some(CalendarCell { date, in_month, marker })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(MonthGrid { year, month, cells })
    }

    /// Grid for the month containing `date`.
    pub fn containing(date: NaiveDate, dates: &[NaiveDate], range: &DateRange) -> Option<Self> {
        Self::build(date.year(), date.month(), dates, range)
    }

    /// One grid per month holding at least one of `dates`, in ascending order.
    ///
    /// Months are picked from the dates themselves, not from markers, so a
    /// month whose only date sits on the range end is still included.
    pub fn for_dates(dates: &[NaiveDate], range: &DateRange) -> Vec<Self> {
        let mut months: Vec<(i32, u32)> = dates.iter().map(|d| (d.year(), d.month())).collect();
        months.sort_unstable();
        months.dedup();
        months.into_iter().filter_map(|(year, month)| Self::build(year, month, dates, range)).collect()
    }

    /// Week rows, Sunday first. Every row has exactly 7 cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Cells in the displayed month carrying `marker`.
    pub fn marked(&self, marker: CellMarker) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().filter(move |c| c.in_month && c.marker == marker).map(|c| c.date)
    }

    /// e.g. `"January 2024"`.
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month.saturating_sub(1)), self.year)
    }

    /// First day of the following month.
    pub fn next_month(&self) -> Option<NaiveDate> {
        add_months(NaiveDate::from_ymd_opt(self.year, self.month, 1)?, 1)
    }

    /// First day of the preceding month.
    pub fn previous_month(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)?.checked_sub_months(chrono::Months::new(1))
    }
}
