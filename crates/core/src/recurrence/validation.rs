use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ValidationError;
use super::types::{Frequency, RecurrenceRule};

/// Upper bound on the occurrence count of a daily rule.
pub const MAX_DAILY_COUNT: u32 = 999;

/// Outcome of checking a rule against its invariants.
///
/// `is_valid` is derived from `errors` at construction and cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Violations in check order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Violation messages in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }
}

/// Validates a recurrence rule for an event starting at `start`.
///
/// Every violated invariant is reported, in a fixed order, so a form can show
/// all problems at once.
pub fn validate(rule: &RecurrenceRule, start: DateTime<Utc>) -> ValidationResult {
    let mut errors = Vec::new();

    if rule.interval < 1 {
        errors.push(ValidationError::IntervalTooSmall);
    }

    if rule.end_condition_count() != 1 {
        errors.push(ValidationError::AmbiguousEndCondition);
    }

    if let Some(end_date) = rule.end_date {
        if end_date <= start {
            errors.push(ValidationError::EndDateNotAfterStart);
        }
    }

    if let Some(count) = rule.count {
        if count < 1 {
            errors.push(ValidationError::CountTooSmall);
        }
        if rule.frequency == Frequency::Daily && count > MAX_DAILY_COUNT {
            errors.push(ValidationError::DailyCountTooLarge);
        }
    }

    match rule.frequency {
        Frequency::Daily => {}
        Frequency::Weekly => {
            if rule.days().is_empty() {
                errors.push(ValidationError::WeeklyMissingDays);
            }
        }
        Frequency::Monthly => {
            if rule.month_days().is_empty() && rule.days().is_empty() {
                errors.push(ValidationError::MonthlyMissingPattern);
            }
        }
        Frequency::Yearly => {
            if rule.months().is_empty() {
                errors.push(ValidationError::YearlyMissingMonth);
            }
            if rule.month_days().is_empty() && rule.days().is_empty() {
                errors.push(ValidationError::YearlyMissingPattern);
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(
            frequency = %rule.frequency,
            error_count = errors.len(),
            "recurrence rule failed validation"
        );
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::types::WeekDay;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 21, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_validate_valid_daily_rule() {
        let rule = RecurrenceRule::new(Frequency::Daily).with_never(true);
        let result = validate(&rule, start());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_validate_interval_too_small() {
        let rule = RecurrenceRule::new(Frequency::Daily)
            .with_interval(0)
            .with_never(true);
        let result = validate(&rule, start());
        assert!(!result.is_valid());
        assert_eq!(result.errors(), &[ValidationError::IntervalTooSmall]);
    }

    #[test]
    fn test_validate_multiple_end_conditions() {
        let rule = RecurrenceRule::new(Frequency::Daily)
            .with_never(true)
            .with_end_date(Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap())
            .with_count(5);
        let result = validate(&rule, start());
        assert!(!result.is_valid());
        assert!(result.messages().contains(
            &"Recurrence must have exactly one end condition (never, end date, or count)"
                .to_string()
        ));
    }

    #[test]
    fn test_validate_missing_end_condition() {
        let rule = RecurrenceRule::new(Frequency::Daily);
        let result = validate(&rule, start());
        assert!(result.contains(ValidationError::AmbiguousEndCondition));
    }

    #[test]
    fn test_validate_end_date_before_start() {
        let rule = RecurrenceRule::new(Frequency::Daily)
            .with_end_date(Utc.with_ymd_and_hms(2024, 7, 20, 10, 0, 0).unwrap());
        let result = validate(&rule, start());
        assert_eq!(result.errors(), &[ValidationError::EndDateNotAfterStart]);
    }

    #[test]
    fn test_validate_end_date_equal_to_start() {
        let rule = RecurrenceRule::new(Frequency::Daily).with_end_date(start());
        let result = validate(&rule, start());
        assert!(result.contains(ValidationError::EndDateNotAfterStart));
    }

    #[test]
    fn test_validate_count_too_small() {
        let rule = RecurrenceRule::new(Frequency::Daily).with_count(0);
        let result = validate(&rule, start());
        assert_eq!(
            result.messages(),
            vec!["Recurrence count must be at least 1".to_string()]
        );
    }

    #[test]
    fn test_validate_daily_count_cap() {
        let over = RecurrenceRule::new(Frequency::Daily).with_count(1000);
        assert!(validate(&over, start()).contains(ValidationError::DailyCountTooLarge));

        let at_cap = RecurrenceRule::new(Frequency::Daily).with_count(MAX_DAILY_COUNT);
        assert!(validate(&at_cap, start()).is_valid());
    }

    #[test]
    fn test_validate_count_cap_only_applies_to_daily() {
        let rule = RecurrenceRule::new(Frequency::Weekly)
            .with_count(1000)
            .with_by_day([WeekDay::MO]);
        assert!(validate(&rule, start()).is_valid());
    }

    #[test]
    fn test_validate_weekly_without_days() {
        let rule = RecurrenceRule::new(Frequency::Weekly)
            .with_never(true)
            .with_by_day([]);
        let result = validate(&rule, start());
        assert_eq!(result.errors(), &[ValidationError::WeeklyMissingDays]);
    }

    #[test]
    fn test_validate_monthly_without_pattern() {
        let rule = RecurrenceRule::new(Frequency::Monthly).with_never(true);
        let result = validate(&rule, start());
        assert!(!result.is_valid());
        assert!(result.messages().contains(
            &"Monthly recurrence must specify either a date or weekday pattern".to_string()
        ));
    }

    #[test]
    fn test_validate_monthly_by_weekday() {
        let rule = RecurrenceRule::new(Frequency::Monthly)
            .with_never(true)
            .with_by_day([WeekDay::SU]);
        assert!(validate(&rule, start()).is_valid());
    }

    #[test]
    fn test_validate_yearly_without_month() {
        let rule = RecurrenceRule::new(Frequency::Yearly)
            .with_never(true)
            .with_by_month([])
            .with_by_month_day([21]);
        let result = validate(&rule, start());
        assert_eq!(result.errors(), &[ValidationError::YearlyMissingMonth]);
    }

    #[test]
    fn test_validate_yearly_without_day_pattern() {
        let rule = RecurrenceRule::new(Frequency::Yearly)
            .with_never(true)
            .with_by_month([7]);
        let result = validate(&rule, start());
        assert_eq!(result.errors(), &[ValidationError::YearlyMissingPattern]);
    }

    #[test]
    fn test_validate_accumulates_in_order() {
        let rule = RecurrenceRule::new(Frequency::Yearly)
            .with_interval(0)
            .with_never(true)
            .with_end_date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_count(0);
        let result = validate(&rule, start());

        assert_eq!(
            result.errors(),
            &[
                ValidationError::IntervalTooSmall,
                ValidationError::AmbiguousEndCondition,
                ValidationError::EndDateNotAfterStart,
                ValidationError::CountTooSmall,
                ValidationError::YearlyMissingMonth,
                ValidationError::YearlyMissingPattern,
            ]
        );
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validation_result_serializes_messages() {
        let rule = RecurrenceRule::new(Frequency::Daily)
            .with_interval(0)
            .with_never(true);
        let value = serde_json::to_value(validate(&rule, start())).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "isValid": false,
                "errors": ["Recurrence interval must be at least 1"]
            })
        );
    }
}
