//! Serde helper functions for the recurrence wire format.
//!
//! Dates travel as ISO-8601 strings with millisecond precision and a `Z`
//! suffix (`2025-01-01T12:00:00.000Z`). Incoming payloads may also carry empty
//! strings where a date is optional; those are treated as None.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats an instant as ISO-8601 in UTC with millisecond precision.
pub fn format_iso_millis(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as UTC midnight.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(rfc_err) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
            .map_err(|_| rfc_err),
    }
}

/// Serialize an optional instant as an ISO-8601 millisecond string.
pub fn serialize_optional_iso<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&format_iso_millis(date)),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional instant, treating empty strings as None.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_datetime(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Deserialize a signed integer as u32. Negatives become 0 and oversized
/// values become `u32::MAX`, so range violations reach validation instead of
/// failing the decode.
pub fn deserialize_saturating_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(saturate_u32)
}

/// Optional variant of [`deserialize_saturating_u32`].
pub fn deserialize_optional_saturating_u32<'de, D>(
    deserializer: D,
) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(|value| value.map(saturate_u32))
}
