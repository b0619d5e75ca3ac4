//! Pretty output formatting.

use chrono::{DateTime, Utc};
use orgevents_core::recurrence::{
    describe, end_type, MonthlyOptions, RecurrencePreset, RecurrenceRule, ValidationResult,
};
use orgevents_core::serde::format_iso_millis;

fn join_codes<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a rule for display.
pub fn format_rule(rule: &RecurrenceRule, start: DateTime<Utc>) -> String {
    let mut output = format!(
        "{}\n  Frequency: {}\n  Interval: {}\n  Ends: {}",
        describe(rule, start, rule.end_date),
        rule.frequency,
        rule.interval,
        end_type(Some(rule)),
    );
    if let Some(end_date) = &rule.end_date {
        output.push_str(&format!("\n  End date: {}", format_iso_millis(end_date)));
    }
    if let Some(count) = rule.count {
        output.push_str(&format!("\n  Count: {}", count));
    }
    if let Some(days) = &rule.by_day {
        output.push_str(&format!("\n  By day: {}", join_codes(days)));
    }
    if let Some(months) = &rule.by_month {
        output.push_str(&format!("\n  By month: {}", join_codes(months)));
    }
    if let Some(days) = &rule.by_month_day {
        output.push_str(&format!("\n  By month day: {}", join_codes(days)));
    }
    output
}

/// Format a validation result for display.
pub fn format_validation(result: &ValidationResult) -> String {
    if result.is_valid() {
        return "Valid".to_string();
    }
    let mut output = format!("INVALID ({})\n", result.errors().len());
    output.push_str(&"-".repeat(40));
    for message in result.messages() {
        output.push_str(&format!("\n  - {}", message));
    }
    output
}

/// Format the monthly anchoring choices for display.
pub fn format_monthly_options(options: &MonthlyOptions) -> String {
    format!(
        "MONTHLY OPTIONS\n  By date: {}\n  By weekday: {}",
        options.by_date_label, options.by_weekday_label
    )
}

/// Format the quick-pick presets for display.
pub fn format_presets(presets: &[RecurrencePreset]) -> String {
    let mut output = format!("PRESETS ({})\n", presets.len());
    output.push_str(&"-".repeat(40));
    for preset in presets {
        output.push_str(&format!("\n  {}", preset.label));
    }
    output
}
