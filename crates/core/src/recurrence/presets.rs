use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::calendar::{month_name, weekday_of};
use super::defaults::create_default;
use super::types::{EndCondition, Frequency, RecurrenceRule, WeekDay};

pub const DOES_NOT_REPEAT_LABEL: &str = "Does not repeat";
pub const CUSTOM_OPTION_LABEL: &str = "Custom...";
pub const CUSTOM_RULE_LABEL: &str = "Custom";

/// What selecting a preset produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum PresetValue {
    DoesNotRepeat,
    Rule(RecurrenceRule),
    /// Open the custom rule editor.
    Custom,
}

/// One entry of the recurrence dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurrencePreset {
    pub label: String,
    pub value: PresetValue,
}

impl RecurrencePreset {
    fn new(label: impl Into<String>, value: PresetValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Returns the preset's rule, if it has one.
    pub fn rule(&self) -> Option<&RecurrenceRule> {
        match &self.value {
            PresetValue::Rule(rule) => Some(rule),
            PresetValue::DoesNotRepeat | PresetValue::Custom => None,
        }
    }
}

/// The quick-pick recurrence options for an event starting at `start`.
pub fn recurrence_presets(start: DateTime<Utc>) -> Vec<RecurrencePreset> {
    let day_of_month = start.day();
    let month = month_name(start.month()).unwrap_or_default();
    let workdays = RecurrenceRule::new(Frequency::Weekly)
        .with_end_condition(EndCondition::Never)
        .with_by_day(WeekDay::WORKDAYS);

    vec![
        RecurrencePreset::new(DOES_NOT_REPEAT_LABEL, PresetValue::DoesNotRepeat),
        RecurrencePreset::new(
            "Daily",
            PresetValue::Rule(create_default(start, Frequency::Daily)),
        ),
        RecurrencePreset::new(
            format!("Weekly on {}", weekday_of(start).full_name()),
            PresetValue::Rule(create_default(start, Frequency::Weekly)),
        ),
        RecurrencePreset::new(
            format!("Monthly on day {day_of_month}"),
            PresetValue::Rule(create_default(start, Frequency::Monthly)),
        ),
        RecurrencePreset::new(
            format!("Annually on {month} {day_of_month}"),
            PresetValue::Rule(create_default(start, Frequency::Yearly)),
        ),
        RecurrencePreset::new(
            "Every weekday (Monday to Friday)",
            PresetValue::Rule(workdays),
        ),
        RecurrencePreset::new(CUSTOM_OPTION_LABEL, PresetValue::Custom),
    ]
}

/// Returns the dropdown label for the current rule.
///
/// Matching is structural and order-sensitive: a rule that differs from every
/// preset in any field, including qualifier order, is "Custom".
pub fn preset_label(rule: Option<&RecurrenceRule>, start: DateTime<Utc>) -> String {
    let Some(rule) = rule else {
        return DOES_NOT_REPEAT_LABEL.to_string();
    };

    recurrence_presets(start)
        .into_iter()
        .find(|preset| preset.rule() == Some(rule))
        .map(|preset| preset.label)
        .unwrap_or_else(|| CUSTOM_RULE_LABEL.to_string())
}
