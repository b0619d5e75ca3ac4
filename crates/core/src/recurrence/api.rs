//! Wire shapes for recurrence rules.
//!
//! These are the payloads exchanged with the persistence layer. Field names,
//! optional-versus-absent semantics, and the ISO-8601 date format are part of
//! that contract. Following the Functional Core pattern, these are pure data
//! types and conversions with no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{RecurrenceError, Result};
use super::types::{Frequency, RecurrenceRule, WeekDay};
use super::validation::validate;
use crate::serde::{
    deserialize_optional_saturating_u32, deserialize_optional_string, deserialize_saturating_u32,
    format_iso_millis, parse_datetime,
};

fn default_interval() -> u32 {
    1
}

fn parse_field(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    parse_datetime(value).map_err(|_| RecurrenceError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A recurrence rule as submitted to the persistence mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecurrenceRule {
    pub frequency: Frequency,
    #[serde(
        default = "default_interval",
        deserialize_with = "deserialize_saturating_u32"
    )]
    pub interval: u32,
    /// Present only as `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub never: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_saturating_u32"
    )]
    pub count: Option<u32>,
    /// ISO-8601 with millisecond precision, e.g. `2025-01-01T12:00:00.000Z`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_day: Option<Vec<WeekDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_month: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_month_day: Option<Vec<u32>>,
}

impl ApiRecurrenceRule {
    /// Parses the wire shape back into a rule.
    pub fn into_rule(self) -> Result<RecurrenceRule> {
        let end_date = self
            .end_date
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_field("endDate", value))
            .transpose()?;

        Ok(RecurrenceRule {
            frequency: self.frequency,
            interval: self.interval,
            never: self.never.unwrap_or(false),
            end_date,
            count: self.count,
            by_day: self.by_day,
            by_month: self.by_month,
            by_month_day: self.by_month_day,
        })
    }
}

impl From<&RecurrenceRule> for ApiRecurrenceRule {
    fn from(rule: &RecurrenceRule) -> Self {
        to_api_shape(rule)
    }
}

/// Converts a rule into its wire shape. No validation is performed.
pub fn to_api_shape(rule: &RecurrenceRule) -> ApiRecurrenceRule {
    ApiRecurrenceRule {
        frequency: rule.frequency,
        interval: rule.interval,
        never: rule.never.then_some(true),
        count: rule.count,
        end_date: rule.end_date.as_ref().map(format_iso_millis),
        by_day: rule.by_day.clone(),
        by_month: rule.by_month.clone(),
        by_month_day: rule.by_month_day.clone(),
    }
}

/// Validates then formats a rule for submission.
///
/// No rule yields `Ok(None)`. An invalid rule yields
/// [`RecurrenceError::InvalidRule`], whose message joins every violation.
pub fn format_for_payload(
    rule: Option<&RecurrenceRule>,
    start: DateTime<Utc>,
) -> Result<Option<ApiRecurrenceRule>> {
    let Some(rule) = rule else {
        return Ok(None);
    };

    let result = validate(rule, start);
    if !result.is_valid() {
        tracing::warn!(
            frequency = %rule.frequency,
            error_count = result.errors().len(),
            "rejecting invalid recurrence rule for submission"
        );
        return Err(RecurrenceError::InvalidRule(result.into_errors()));
    }

    Ok(Some(to_api_shape(rule)))
}

/// A recurrence rule as read back from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecurrenceRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub frequency: Frequency,
    #[serde(
        default = "default_interval",
        deserialize_with = "deserialize_saturating_u32"
    )]
    pub interval: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub recurrence_start_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub recurrence_end_date: Option<String>,
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

impl StoredRecurrenceRule {
    /// Parses the stored series start, if any.
    pub fn start_date(&self) -> Result<Option<DateTime<Utc>>> {
        self.recurrence_start_date
            .as_deref()
            .map(|value| parse_field("recurrenceStartDate", value))
            .transpose()
    }

    /// Converts the stored rule into an editable rule.
    ///
    /// A rule with neither an end date nor a count is never-ending.
    pub fn into_rule(self) -> Result<RecurrenceRule> {
        let end_date = self
            .recurrence_end_date
            .as_deref()
            .map(|value| parse_field("recurrenceEndDate", value))
            .transpose()?;
        let never = end_date.is_none() && self.count.is_none();

        Ok(RecurrenceRule {
            frequency: self.frequency,
            interval: self.interval,
            never,
            end_date,
            count: if end_date.is_some() { None } else { self.count },
            by_day: self.by_day,
            by_month: self.by_month,
            by_month_day: self.by_month_day,
        })
    }
}
