use chrono::{Datelike, NaiveDate, Weekday};

use crate::api::{DayOverflow, Options, generate, generate_with};
use crate::range::DateRange;
use crate::recurrence::{RecurrenceSpec, WeekOfMonth, WeekdaySet};
use crate::{MAX_OCCURRENCES, RangeError, validate_range};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(start).with_end(end)
}

#[test]
fn daily_every_three_days() {
    let dates = generate(&RecurrenceSpec::daily(3), &range("2024-01-15", "2024-01-21"));
    assert_eq!(dates, vec![ymd(2024, 1, 15), ymd(2024, 1, 18), ymd(2024, 1, 21)]);
}

#[test]
fn daily_without_end_runs_for_a_year() {
    let dates = generate(&RecurrenceSpec::daily(7), &DateRange::new("2024-01-01"));
    assert_eq!(dates.len(), 53);
    assert_eq!(dates.last(), Some(&ymd(2024, 12, 30)));
}

#[test]
fn daily_hits_the_cap() {
    let dates = generate(&RecurrenceSpec::daily(1), &range("2024-01-01", "2030-12-31"));
    assert_eq!(dates.len(), MAX_OCCURRENCES);
    assert_eq!(dates[0], ymd(2024, 1, 1));
    assert_eq!(dates[99], ymd(2024, 4, 9));
}

#[test]
fn weekly_monday_wednesday_friday() {
    let days = WeekdaySet::from_indices([1, 3, 5]);
    let dates = generate(&RecurrenceSpec::weekly(1, days), &range("2024-01-15", "2024-02-01"));
    let expected: Vec<NaiveDate> = [15, 17, 19, 22, 24, 26, 29, 31].into_iter().map(|d| ymd(2024, 1, d)).collect();
    assert_eq!(dates, expected);
}

#[test]
fn weekly_clips_the_first_partial_week() {
    // 2024-01-17 is a Wednesday: Monday the 15th is before the start.
    let days = WeekdaySet::MONDAY | WeekdaySet::FRIDAY;
    let dates = generate(&RecurrenceSpec::weekly(1, days), &range("2024-01-17", "2024-01-29"));
    assert_eq!(dates, vec![ymd(2024, 1, 19), ymd(2024, 1, 22), ymd(2024, 1, 26), ymd(2024, 1, 29)]);
}

#[test]
fn weekly_empty_set_uses_start_weekday() {
    let dates = generate(&RecurrenceSpec::weekly(1, WeekdaySet::empty()), &range("2024-01-18", "2024-02-08"));
    assert_eq!(dates, vec![ymd(2024, 1, 18), ymd(2024, 1, 25), ymd(2024, 2, 1), ymd(2024, 2, 8)]);
    assert!(dates.iter().all(|d| d.weekday() == Weekday::Thu));
}

#[test]
fn weekly_interval_skips_whole_weeks() {
    let dates = generate(&RecurrenceSpec::weekly(2, WeekdaySet::MONDAY), &range("2024-01-15", "2024-02-29"));
    assert_eq!(dates, vec![ymd(2024, 1, 15), ymd(2024, 1, 29), ymd(2024, 2, 12), ymd(2024, 2, 26)]);
}

#[test]
fn weekly_every_day_is_capped_at_one_hundred() {
    let dates = generate(&RecurrenceSpec::weekly(1, WeekdaySet::all()), &range("2024-01-03", "2026-01-01"));
    assert_eq!(dates.len(), MAX_OCCURRENCES);
    assert_eq!(dates[0], ymd(2024, 1, 3));
    assert!(dates.windows(2).all(|w| w[1] - w[0] == chrono::Duration::days(1)));
}

#[test]
fn monthly_last_monday() {
    let spec = RecurrenceSpec::monthly_on_weekday(1, WeekOfMonth::Last, Weekday::Mon);
    let dates = generate(&spec, &range("2024-01-01", "2024-03-31"));
    assert_eq!(dates, vec![ymd(2024, 1, 29), ymd(2024, 2, 26), ymd(2024, 3, 25)]);
}

#[test]
fn monthly_first_monday_every_quarter() {
    let spec = RecurrenceSpec::monthly_on_weekday(3, WeekOfMonth::First, Weekday::Mon);
    let dates = generate(&spec, &range("2024-01-01", "2024-12-31"));
    assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 4, 1), ymd(2024, 7, 1), ymd(2024, 10, 7)]);
}

#[test]
fn monthly_day_before_start_waits_for_next_month() {
    let dates = generate(&RecurrenceSpec::monthly_on_day(1, 15), &range("2024-01-20", "2024-03-31"));
    assert_eq!(dates, vec![ymd(2024, 2, 15), ymd(2024, 3, 15)]);

    let inclusive = generate(&RecurrenceSpec::monthly_on_day(1, 15), &range("2024-01-15", "2024-02-15"));
    assert_eq!(inclusive, vec![ymd(2024, 1, 15), ymd(2024, 2, 15)]);
}

#[test]
fn monthly_cursor_starts_on_the_first_of_the_start_month() {
    // Months are walked from the 1st, not from the start day, so the loop
    // reaches March even though the window ends on the 10th. Stepping from
    // the 20th would stop at March 20th and lose March 5th.
    let dates = generate(&RecurrenceSpec::monthly_on_day(1, 5), &range("2024-01-15", "2024-03-10"));
    assert_eq!(dates, vec![ymd(2024, 2, 5), ymd(2024, 3, 5)]);
}

#[test]
fn monthly_day_31_skips_short_months_by_default() {
    let dates = generate(&RecurrenceSpec::monthly_on_day(1, 31), &range("2024-01-01", "2024-06-30"));
    assert_eq!(dates, vec![ymd(2024, 1, 31), ymd(2024, 3, 31), ymd(2024, 5, 31)]);
}

#[test]
fn monthly_day_31_with_clamp_and_rollover() {
    let spec = RecurrenceSpec::monthly_on_day(1, 31);
    let window = range("2024-01-01", "2024-03-31");

    let clamp = Options { month_day_overflow: DayOverflow::Clamp, ..Options::default() };
    assert_eq!(generate_with(&spec, &window, &clamp), vec![ymd(2024, 1, 31), ymd(2024, 2, 29), ymd(2024, 3, 31)]);

    let roll = Options { month_day_overflow: DayOverflow::RollOver, ..Options::default() };
    assert_eq!(generate_with(&spec, &window, &roll), vec![ymd(2024, 1, 31), ymd(2024, 3, 2), ymd(2024, 3, 31)]);
}

#[test]
fn yearly_christmas() {
    let dates = generate(&RecurrenceSpec::yearly(1, 11, 25), &range("2024-01-01", "2026-12-31"));
    assert_eq!(dates, vec![ymd(2024, 12, 25), ymd(2025, 12, 25), ymd(2026, 12, 25)]);
}

#[test]
fn yearly_interval_and_late_start() {
    let dates = generate(&RecurrenceSpec::yearly(2, 11, 25), &range("2024-01-01", "2028-12-31"));
    assert_eq!(dates, vec![ymd(2024, 12, 25), ymd(2026, 12, 25), ymd(2028, 12, 25)]);

    let late = generate(&RecurrenceSpec::yearly(1, 11, 25), &DateRange::new("2024-12-26"));
    assert_eq!(late, vec![ymd(2025, 12, 25)]);
}

#[test]
fn yearly_cursor_starts_on_january_first() {
    // Stepping from the start day would reach 2026-06-01, past the end, and
    // lose 2026-03-01 even though it is inside the window.
    let dates = generate(&RecurrenceSpec::yearly(1, 2, 1), &range("2024-06-01", "2026-04-30"));
    assert_eq!(dates, vec![ymd(2025, 3, 1), ymd(2026, 3, 1)]);
}

#[test]
fn yearly_leap_day_policies() {
    let spec = RecurrenceSpec::yearly(1, 1, 29);
    let window = range("2024-01-01", "2028-12-31");

    assert_eq!(generate(&spec, &window), vec![ymd(2024, 2, 29), ymd(2028, 2, 29)]);

    let clamp = Options { leap_day_overflow: DayOverflow::Clamp, ..Options::default() };
    let clamped = generate_with(&spec, &window, &clamp);
    assert_eq!(clamped.len(), 5);
    assert_eq!(clamped[1], ymd(2025, 2, 28));

    let roll = Options { leap_day_overflow: DayOverflow::RollOver, ..Options::default() };
    assert_eq!(generate_with(&spec, &window, &roll)[1], ymd(2025, 3, 1));
}

#[test]
fn yearly_out_of_range_month_yields_nothing() {
    assert!(generate(&RecurrenceSpec::yearly(1, 12, 1), &range("2024-01-01", "2030-01-01")).is_empty());
}

#[test]
fn validation_scenarios() {
    assert_eq!(validate_range(&range("", "2024-01-01")), Err(RangeError::MissingStart));
    assert_eq!(validate_range(&range("2024-12-31", "2024-01-01")), Err(RangeError::EndBeforeStart));
    assert_eq!(validate_range(&range("2024-01-01", "2024-12-31")), Ok(()));
}

fn sample_specs() -> Vec<RecurrenceSpec> {
    vec![
        RecurrenceSpec::daily(1),
        RecurrenceSpec::daily(3),
        RecurrenceSpec::daily(365),
        RecurrenceSpec::weekly(1, WeekdaySet::empty()),
        RecurrenceSpec::weekly(1, WeekdaySet::all()),
        RecurrenceSpec::weekly(3, WeekdaySet::SUNDAY | WeekdaySet::SATURDAY),
        RecurrenceSpec::monthly_on_day(1, 31),
        RecurrenceSpec::monthly_on_day(2, 1),
        RecurrenceSpec::monthly_on_weekday(1, WeekOfMonth::Fourth, Weekday::Wed),
        RecurrenceSpec::monthly_on_weekday(12, WeekOfMonth::Last, Weekday::Sun),
        RecurrenceSpec::yearly(1, 1, 29),
        RecurrenceSpec::yearly(10, 6, 4),
    ]
}

fn sample_ranges() -> Vec<DateRange> {
    vec![
        DateRange::new("2024-01-15"),
        range("2024-02-29", "2024-02-29"),
        range("2023-12-31", "2024-01-06"),
        range("2020-01-01", "2099-12-31"),
        range("2024-03-15", "2024-04-14"),
    ]
}

#[test]
fn every_sequence_is_capped_sorted_unique_and_in_range() {
    for spec in sample_specs() {
        for range in sample_ranges() {
            let window = range.resolve().unwrap();
            let dates = generate(&spec, &range);

            assert!(dates.len() <= MAX_OCCURRENCES, "{spec:?} {range:?}");
            assert!(dates.windows(2).all(|w| w[0] < w[1]), "{spec:?} {range:?}");
            assert!(dates.iter().all(|d| window.contains(*d)), "{spec:?} {range:?}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for spec in sample_specs() {
        for range in sample_ranges() {
            assert_eq!(generate(&spec, &range), generate(&spec, &range), "{spec:?} {range:?}");
        }
    }
}
