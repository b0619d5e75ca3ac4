use std::fmt;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_optional_datetime, deserialize_optional_saturating_u32,
    deserialize_saturating_u32, serialize_optional_iso,
};

/// The repeat unit of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// All frequencies, shortest unit first.
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    /// Returns the wire code (`DAILY`, `WEEKLY`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RFC 5545 two-letter weekday codes, ordered Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    SU,
    MO,
    TU,
    WE,
    TH,
    FR,
    SA,
}

impl WeekDay {
    /// All weekdays, Sunday first.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::SU,
        WeekDay::MO,
        WeekDay::TU,
        WeekDay::WE,
        WeekDay::TH,
        WeekDay::FR,
        WeekDay::SA,
    ];

    /// Monday through Friday.
    pub const WORKDAYS: [WeekDay; 5] = [
        WeekDay::MO,
        WeekDay::TU,
        WeekDay::WE,
        WeekDay::TH,
        WeekDay::FR,
    ];

    /// Looks up a weekday by its Sunday-based index (Sunday = 0).
    pub fn from_index(index: usize) -> Option<WeekDay> {
        Self::ALL.get(index).copied()
    }

    /// Returns the Sunday-based index (Sunday = 0, Saturday = 6).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the full English day name.
    pub fn full_name(&self) -> &'static str {
        match self {
            WeekDay::SU => "Sunday",
            WeekDay::MO => "Monday",
            WeekDay::TU => "Tuesday",
            WeekDay::WE => "Wednesday",
            WeekDay::TH => "Thursday",
            WeekDay::FR => "Friday",
            WeekDay::SA => "Saturday",
        }
    }

    /// Returns the two-letter wire code.
    pub fn code(&self) -> &'static str {
        match self {
            WeekDay::SU => "SU",
            WeekDay::MO => "MO",
            WeekDay::TU => "TU",
            WeekDay::WE => "WE",
            WeekDay::TH => "TH",
            WeekDay::FR => "FR",
            WeekDay::SA => "SA",
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => WeekDay::SU,
            Weekday::Mon => WeekDay::MO,
            Weekday::Tue => WeekDay::TU,
            Weekday::Wed => WeekDay::WE,
            Weekday::Thu => WeekDay::TH,
            Weekday::Fri => WeekDay::FR,
            Weekday::Sat => WeekDay::SA,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a recurrence terminates. Exactly one applies to a well-formed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCondition {
    Never,
    On(DateTime<Utc>),
    After(u32),
}

/// The end option a form should show as selected for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndType {
    Never,
    On,
    After,
}

impl EndType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndType::Never => "never",
            EndType::On => "on",
            EndType::After => "after",
        }
    }
}

impl fmt::Display for EndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_interval() -> u32 {
    1
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A recurring-event schedule.
///
/// The three end-condition fields mirror the wire contract and may disagree
/// while a rule is being edited; [`validate`](super::validate) reports that.
/// Use [`RecurrenceRule::with_end_condition`] to set them consistently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every N units.
    #[serde(
        default = "default_interval",
        deserialize_with = "deserialize_saturating_u32"
    )]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub never: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_iso",
        deserialize_with = "deserialize_optional_datetime"
    )]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_saturating_u32"
    )]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_day: Option<Vec<WeekDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_month: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_month_day: Option<Vec<u32>>,
}

impl RecurrenceRule {
    /// Creates a rule with interval 1 and no end condition or qualifiers.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            never: false,
            end_date: None,
            count: None,
            by_day: None,
            by_month: None,
            by_month_day: None,
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the `never` flag without touching the other end fields.
    pub fn with_never(mut self, never: bool) -> Self {
        self.never = never;
        self
    }

    /// Sets the end date without touching the other end fields.
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the occurrence count without touching the other end fields.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Replaces all three end fields so that exactly one is set.
    pub fn with_end_condition(mut self, end: EndCondition) -> Self {
        self.never = false;
        self.end_date = None;
        self.count = None;
        match end {
            EndCondition::Never => self.never = true,
            EndCondition::On(date) => self.end_date = Some(date),
            EndCondition::After(count) => self.count = Some(count),
        }
        self
    }

    pub fn with_by_day(mut self, days: impl IntoIterator<Item = WeekDay>) -> Self {
        self.by_day = Some(days.into_iter().collect());
        self
    }

    pub fn with_by_month(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.by_month = Some(months.into_iter().collect());
        self
    }

    pub fn with_by_month_day(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.by_month_day = Some(days.into_iter().collect());
        self
    }

    /// Returns the end condition when exactly one end field is set.
    pub fn end_condition(&self) -> Option<EndCondition> {
        match (self.never, self.end_date, self.count) {
            (true, None, None) => Some(EndCondition::Never),
            (false, Some(date), None) => Some(EndCondition::On(date)),
            (false, None, Some(count)) => Some(EndCondition::After(count)),
            _ => None,
        }
    }

    /// Number of end fields currently set.
    pub fn end_condition_count(&self) -> usize {
        [self.never, self.end_date.is_some(), self.count.is_some()]
            .iter()
            .filter(|set| **set)
            .count()
    }

    /// Weekday qualifiers, empty when absent.
    pub fn days(&self) -> &[WeekDay] {
        self.by_day.as_deref().unwrap_or(&[])
    }

    /// Month qualifiers (1-12), empty when absent.
    pub fn months(&self) -> &[u32] {
        self.by_month.as_deref().unwrap_or(&[])
    }

    /// Day-of-month qualifiers, empty when absent.
    pub fn month_days(&self) -> &[u32] {
        self.by_month_day.as_deref().unwrap_or(&[])
    }
}
