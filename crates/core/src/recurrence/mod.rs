//! Recurrence rule engine for recurring events.
//!
//! Models an RFC 5545-inspired "every N days/weeks/months/years" rule and
//! provides validation, default synthesis, month-position arithmetic,
//! human-readable descriptions, and the wire format used for persistence.

mod api;
mod calendar;
mod compare;
mod defaults;
mod description;
mod editing;
mod error;
mod presets;
mod types;
mod validation;

pub use api::{format_for_payload, to_api_shape, ApiRecurrenceRule, StoredRecurrenceRule};
pub use calendar::{
    month_name, monthly_options, ordinal_label, week_of_month, weekday_name,
    weekday_occurrence_detail, weekday_occurrence_in_month, weekday_of, MonthlyOptions,
    WeekdayOccurrence, WeekdayOrdinal, WeekdayPattern,
};
pub use compare::{end_type, rules_equal};
pub use defaults::create_default;
pub use description::{describe, join_day_names, long_date, ordinal_suffix};
pub use editing::{
    parse_positive, EndOptionContext, MonthlyPattern, END_DATE_AFTER_EVENT_DAYS,
    END_DATE_FALLBACK_DAYS, YEARLY_DEFAULT_COUNT,
};
pub use error::{join_messages, RecurrenceError, Result, ValidationError};
pub use presets::{
    preset_label, recurrence_presets, PresetValue, RecurrencePreset, CUSTOM_OPTION_LABEL,
    CUSTOM_RULE_LABEL, DOES_NOT_REPEAT_LABEL,
};
pub use types::{EndCondition, EndType, Frequency, RecurrenceRule, WeekDay};
pub use validation::{validate, ValidationResult, MAX_DAILY_COUNT};
