use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly, Frequency::Yearly];

    /// Largest accepted interval for this frequency.
    pub fn max_interval(self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Yearly => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Frequency::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of weekdays. Bit `i` is the weekday with Sunday-based index `i`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WeekdaySet: u8 {
        const SUNDAY    = 1 << 0;
        const MONDAY    = 1 << 1;
        const TUESDAY   = 1 << 2;
        const WEDNESDAY = 1 << 3;
        const THURSDAY  = 1 << 4;
        const FRIDAY    = 1 << 5;
        const SATURDAY  = 1 << 6;
    }
}

impl WeekdaySet {
    /// Build a set from Sunday-based indices. Indices above 6 are ignored.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        indices.into_iter().filter(|i| *i <= 6).fold(WeekdaySet::empty(), |set, i| set | WeekdaySet::from_bits_retain(1 << i))
    }

    pub fn of(day: Weekday) -> Self {
        WeekdaySet::from_bits_retain(1 << day.num_days_from_sunday())
    }

    pub fn contains_weekday(self, day: Weekday) -> bool {
        self.contains(WeekdaySet::of(day))
    }

    /// The set itself, or just `fallback` when the set is empty.
    pub fn or_weekday(self, fallback: Weekday) -> Self {
        if self.is_empty() { WeekdaySet::of(fallback) } else { self }
    }

    /// Members in ascending order, Sunday first.
    pub fn weekdays(self) -> impl Iterator<Item = Weekday> {
        (0u8..7).filter(move |i| self.bits() & (1u8 << *i) != 0).filter_map(weekday_from_index)
    }
}

/// Sunday-based weekday index (Sunday = 0 .. Saturday = 6).
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// `1..=4` for the nth occurrence, `5` for the last one.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(WeekOfMonth::First),
            2 => Some(WeekOfMonth::Second),
            3 => Some(WeekOfMonth::Third),
            4 => Some(WeekOfMonth::Fourth),
            5 => Some(WeekOfMonth::Last),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 2,
            WeekOfMonth::Third => 3,
            WeekOfMonth::Fourth => 4,
            WeekOfMonth::Last => 5,
        }
    }
}

/// The two mutually exclusive monthly modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyPattern {
    /// A fixed day of the month (1-31).
    DayOfMonth(u32),
    /// The nth (or last) occurrence of a weekday.
    NthWeekday { week: WeekOfMonth, weekday: Weekday },
}

/// A repeating calendar pattern.
///
/// `month` in [`RecurrenceSpec::Yearly`] is zero-based (0 = January), matching
/// the flat [`RecurrenceSettings`](crate::RecurrenceSettings) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecurrenceSpec {
    Daily { interval: u32 },
    Weekly { interval: u32, days: WeekdaySet },
    Monthly { interval: u32, pattern: MonthlyPattern },
    Yearly { interval: u32, month: u32, day: u32 },
}

impl RecurrenceSpec {
    pub fn daily(interval: u32) -> Self {
        RecurrenceSpec::Daily { interval }
    }

    pub fn weekly(interval: u32, days: WeekdaySet) -> Self {
        RecurrenceSpec::Weekly { interval, days }
    }

    pub fn monthly_on_day(interval: u32, day: u32) -> Self {
        RecurrenceSpec::Monthly { interval, pattern: MonthlyPattern::DayOfMonth(day) }
    }

    pub fn monthly_on_weekday(interval: u32, week: WeekOfMonth, weekday: Weekday) -> Self {
        RecurrenceSpec::Monthly { interval, pattern: MonthlyPattern::NthWeekday { week, weekday } }
    }

    pub fn yearly(interval: u32, month: u32, day: u32) -> Self {
        RecurrenceSpec::Yearly { interval, month, day }
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            RecurrenceSpec::Daily { .. } => Frequency::Daily,
            RecurrenceSpec::Weekly { .. } => Frequency::Weekly,
            RecurrenceSpec::Monthly { .. } => Frequency::Monthly,
            RecurrenceSpec::Yearly { .. } => Frequency::Yearly,
        }
    }

    /// Step between occurrences, never less than 1.
    pub fn interval(&self) -> u32 {
        let raw = match self {
            RecurrenceSpec::Daily { interval }
            | RecurrenceSpec::Weekly { interval, .. }
            | RecurrenceSpec::Monthly { interval, .. }
            | RecurrenceSpec::Yearly { interval, .. } => *interval,
        };
        raw.max(1)
    }
}
