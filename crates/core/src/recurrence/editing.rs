//! Copy-with-changes transitions used while a rule is edited in a form.
//!
//! Each transition consumes a rule and returns the replacement. Nothing here
//! reads a clock; callers pass `now` when a default end date may be needed.

use chrono::{DateTime, Datelike, Duration, Utc};

use super::calendar::weekday_of;
use super::defaults::seed_qualifiers;
use super::types::{EndCondition, EndType, Frequency, RecurrenceRule, WeekDay};

/// Occurrence count preselected when a rule becomes yearly.
pub const YEARLY_DEFAULT_COUNT: u32 = 5;

/// Days past the event end used as the default "ends on" date.
pub const END_DATE_AFTER_EVENT_DAYS: i64 = 7;

/// Days past `now` used as the default "ends on" date when the event end is unknown.
pub const END_DATE_FALLBACK_DAYS: i64 = 30;

/// Which anchor a monthly rule uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyPattern {
    /// Same day of the month as the start date.
    ByDate,
    /// Same weekday as the start date.
    ByWeekday,
}

/// Inputs needed to pick defaults when the end option changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOptionContext {
    pub event_end: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
    /// Count typed into the form, if any.
    pub count: Option<u32>,
}

impl EndOptionContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            event_end: None,
            now,
            count: None,
        }
    }

    pub fn with_event_end(mut self, event_end: DateTime<Utc>) -> Self {
        self.event_end = Some(event_end);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl RecurrenceRule {
    /// Switches frequency and reseeds the qualifiers from `start`.
    ///
    /// Switching to yearly also preselects "after 5 occurrences".
    pub fn with_frequency(mut self, frequency: Frequency, start: DateTime<Utc>) -> Self {
        self.frequency = frequency;
        let rule = seed_qualifiers(self, start);
        match frequency {
            Frequency::Yearly => {
                rule.with_end_condition(EndCondition::After(YEARLY_DEFAULT_COUNT))
            }
            Frequency::Daily | Frequency::Weekly | Frequency::Monthly => rule,
        }
    }

    /// Applies a newly selected end option, filling in a sensible default value.
    pub fn with_end_type(self, end_type: EndType, context: &EndOptionContext) -> Self {
        let end = match end_type {
            EndType::Never => EndCondition::Never,
            EndType::On => EndCondition::On(self.end_date.unwrap_or_else(|| {
                match context.event_end {
                    Some(event_end) => event_end + Duration::days(END_DATE_AFTER_EVENT_DAYS),
                    None => context.now + Duration::days(END_DATE_FALLBACK_DAYS),
                }
            })),
            EndType::After => {
                let default_count = match self.frequency {
                    Frequency::Yearly => YEARLY_DEFAULT_COUNT,
                    _ => 1,
                };
                EndCondition::After(context.count.or(self.count).unwrap_or(default_count))
            }
        };
        self.with_end_condition(end)
    }

    /// Adds `day` to byDay, or removes it when already selected.
    pub fn toggle_day(mut self, day: WeekDay) -> Self {
        let mut days = self.by_day.take().unwrap_or_default();
        if days.contains(&day) {
            days.retain(|selected| *selected != day);
        } else {
            days.push(day);
        }
        self.by_day = Some(days);
        self
    }

    /// Anchors a monthly rule to the start date's day or weekday.
    pub fn with_monthly_pattern(mut self, pattern: MonthlyPattern, start: DateTime<Utc>) -> Self {
        match pattern {
            MonthlyPattern::ByDate => {
                self.by_day = None;
                self.by_month_day = Some(vec![start.day()]);
            }
            MonthlyPattern::ByWeekday => {
                self.by_month_day = None;
                self.by_day = Some(vec![weekday_of(start)]);
            }
        }
        self
    }
}

/// Reads a leading integer from free text, clamping to at least 1.
///
/// Used for the interval and count inputs, where anything unparsable falls
/// back to 1.
pub fn parse_positive(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}
