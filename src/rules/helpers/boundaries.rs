use chrono::{Datelike, Duration, NaiveDate};

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date.checked_sub_signed(Duration::days(offset)).unwrap_or(date)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// Last calendar day of `month` (1-12) in `year`.
pub fn end_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_of_week_aligns_to_sunday() {
        let start = start_of_week(ymd(2024, 1, 17));
        assert_eq!(start, ymd(2024, 1, 14));
        assert_eq!(start.weekday(), Weekday::Sun);
        assert_eq!(start_of_week(ymd(2024, 1, 14)), ymd(2024, 1, 14));
    }

    #[test]
    fn start_of_week_crosses_year_boundary() {
        assert_eq!(start_of_week(ymd(2025, 1, 1)), ymd(2024, 12, 29));
    }

    #[test]
    fn month_and_year_starts() {
        assert_eq!(start_of_month(ymd(2024, 5, 22)), ymd(2024, 5, 1));
        assert_eq!(start_of_year(ymd(2024, 5, 22)), ymd(2024, 1, 1));
    }

    #[test]
    fn end_of_month_handles_december_and_february() {
        assert_eq!(end_of_month(2024, 12), Some(ymd(2024, 12, 31)));
        assert_eq!(end_of_month(2024, 2), Some(ymd(2024, 2, 29)));
        assert_eq!(end_of_month(2023, 2), Some(ymd(2023, 2, 28)));
        assert_eq!(end_of_month(2024, 0), None);
    }
}
