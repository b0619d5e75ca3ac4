use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single violated recurrence invariant.
///
/// The display text is what forms show to users, so it is part of the
/// contract and must not change casually.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Recurrence interval must be at least 1")]
    IntervalTooSmall,
    #[error("Recurrence must have exactly one end condition (never, end date, or count)")]
    AmbiguousEndCondition,
    #[error("Recurrence end date must be after event start date")]
    EndDateNotAfterStart,
    #[error("Recurrence count must be at least 1")]
    CountTooSmall,
    #[error("Daily recurrence count must be no more than 999")]
    DailyCountTooLarge,
    #[error("Weekly recurrence must specify at least one day of the week")]
    WeeklyMissingDays,
    #[error("Monthly recurrence must specify either a date or weekday pattern")]
    MonthlyMissingPattern,
    #[error("Yearly recurrence must specify at least one month")]
    YearlyMissingMonth,
    #[error("Yearly recurrence must specify either a date or weekday pattern")]
    YearlyMissingPattern,
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Errors raised at the recurrence boundaries that are allowed to fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("{}", join_messages(.0))]
    InvalidRule(Vec<ValidationError>),
    #[error("Invalid date in {field}: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// Joins validation messages the way submission errors display them.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for fallible recurrence operations.
pub type Result<T> = std::result::Result<T, RecurrenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::IntervalTooSmall.to_string(),
            "Recurrence interval must be at least 1"
        );
        assert_eq!(
            ValidationError::DailyCountTooLarge.to_string(),
            "Daily recurrence count must be no more than 999"
        );
    }

    #[test]
    fn test_validation_error_serializes_as_message() {
        let value = serde_json::to_value(ValidationError::WeeklyMissingDays).unwrap();
        assert_eq!(
            value,
            "Weekly recurrence must specify at least one day of the week"
        );
    }

    #[test]
    fn test_invalid_rule_joins_messages() {
        let error = RecurrenceError::InvalidRule(vec![
            ValidationError::IntervalTooSmall,
            ValidationError::CountTooSmall,
        ]);
        assert_eq!(
            error.to_string(),
            "Recurrence interval must be at least 1, Recurrence count must be at least 1"
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let error = RecurrenceError::InvalidDate {
            field: "recurrenceEndDate",
            value: "soon".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date in recurrenceEndDate: soon");
    }
}
