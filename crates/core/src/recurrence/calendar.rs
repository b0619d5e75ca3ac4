//! Calendar arithmetic for "Nth weekday of the month" patterns.
//!
//! Every function reads the UTC calendar components of its argument, so the
//! results never depend on the caller's local timezone. Time of day is
//! ignored.

use chrono::{DateTime, Datelike, Days, Utc};
use serde::{Serialize, Serializer};

use super::types::WeekDay;

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

/// Position of a weekday within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayOrdinal {
    /// The 1st..5th occurrence.
    Nth(u8),
    /// The final occurrence of this weekday in the month.
    Last,
}

impl WeekdayOrdinal {
    /// Returns the ordinal word ("first".."fifth", or "last").
    pub fn label(&self) -> &'static str {
        match self {
            WeekdayOrdinal::Nth(n) => ordinal_label(i64::from(*n)),
            WeekdayOrdinal::Last => "last",
        }
    }
}

impl Serialize for WeekdayOrdinal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WeekdayOrdinal::Nth(n) => serializer.serialize_u8(*n),
            WeekdayOrdinal::Last => serializer.serialize_str("LAST"),
        }
    }
}

/// Both facts about a weekday's position in its month, kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayOccurrence {
    /// 1..=5, counting from the first of the month.
    pub ordinal: u8,
    /// Whether no later occurrence of the weekday exists in the month.
    pub is_last: bool,
}

/// A weekday together with its position in the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayPattern {
    pub week: WeekdayOrdinal,
    pub day: WeekDay,
}

/// The two ways a monthly rule can be anchored to a start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOptions {
    pub by_date_label: String,
    pub by_weekday_label: String,
    pub date_value: u32,
    pub weekday_value: WeekdayPattern,
}

/// Returns the weekday of `date` in UTC.
pub fn weekday_of(date: DateTime<Utc>) -> WeekDay {
    WeekDay::from(date.weekday())
}

/// Returns the calendar row (1..=6) of a Sunday-first month grid holding `date`.
pub fn week_of_month(date: DateTime<Utc>) -> u32 {
    let day = date.day();
    let weekday = date.weekday().num_days_from_sunday();
    let first_of_month = (weekday + 35 - (day - 1)) % 7;
    (day + first_of_month).div_ceil(7)
}

/// Returns the ordinal of `date`'s weekday in its month and whether it is the last one.
pub fn weekday_occurrence_detail(date: DateTime<Utc>) -> WeekdayOccurrence {
    let day = date.date_naive();
    // day() is at most 31, so the ordinal fits in 1..=5.
    let ordinal = ((day.day() - 1) / 7 + 1) as u8;
    let is_last = day
        .checked_add_days(Days::new(7))
        .is_none_or(|next| next.month() != day.month());

    WeekdayOccurrence { ordinal, is_last }
}

/// Returns the position of `date`'s weekday in its month.
///
/// When the same weekday one week later falls in the next month the result is
/// [`WeekdayOrdinal::Last`], even if the numeric ordinal is 4 or 5.
pub fn weekday_occurrence_in_month(date: DateTime<Utc>) -> WeekdayOrdinal {
    let occurrence = weekday_occurrence_detail(date);
    if occurrence.is_last {
        WeekdayOrdinal::Last
    } else {
        WeekdayOrdinal::Nth(occurrence.ordinal)
    }
}

/// Maps 1..=5 to "first".."fifth"; anything else is "last".
pub fn ordinal_label(n: i64) -> &'static str {
    match n {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        _ => "last",
    }
}

/// Full day name for a Sunday-based index, or None outside 0..=6.
pub fn weekday_name(day_index: usize) -> Option<&'static str> {
    WeekDay::from_index(day_index).map(|day| day.full_name())
}

/// Full month name for 1..=12, or None otherwise.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Builds the "by date" and "by weekday" choices for a monthly rule starting at `start`.
pub fn monthly_options(start: DateTime<Utc>) -> MonthlyOptions {
    let date_value = start.day();
    let weekday_value = WeekdayPattern {
        week: weekday_occurrence_in_month(start),
        day: weekday_of(start),
    };

    MonthlyOptions {
        by_date_label: format!("Monthly on day {date_value}"),
        by_weekday_label: format!(
            "Monthly on the {} {}",
            weekday_value.week.label(),
            weekday_value.day.full_name()
        ),
        date_value,
        weekday_value,
    }
}
