use chrono::{DateTime, Datelike, Utc};

use super::calendar::month_name;
use super::types::{Frequency, RecurrenceRule, WeekDay};

/// Returns the English ordinal suffix for `n` ("st", "nd", "rd" or "th").
pub fn ordinal_suffix(n: i64) -> &'static str {
    match (n % 10, n % 100) {
        (1, rem) if rem != 11 => "st",
        (2, rem) if rem != 12 => "nd",
        (3, rem) if rem != 13 => "rd",
        _ => "th",
    }
}

/// Formats a date the long way, e.g. "July 21, 2025".
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Joins day names as "A", "A and B", or "A, B and C".
pub fn join_day_names(days: &[WeekDay]) -> String {
    let names: Vec<&str> = days.iter().map(WeekDay::full_name).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn ordinal_days(days: impl IntoIterator<Item = u32>) -> String {
    days.into_iter()
        .map(|day| format!("{day}{}", ordinal_suffix(i64::from(day))))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a rule as a single human-readable sentence.
///
/// `explicit_end` takes priority over the rule's own end fields when choosing
/// the trailing clause; only one end clause is ever emitted.
pub fn describe(
    rule: &RecurrenceRule,
    start: DateTime<Utc>,
    explicit_end: Option<DateTime<Utc>>,
) -> String {
    let prefix = if rule.interval == 1 {
        String::new()
    } else {
        format!("Every {} ", rule.interval)
    };

    let mut text = match rule.frequency {
        Frequency::Daily => {
            if rule.interval == 1 {
                "Daily".to_string()
            } else {
                format!("Every {} days", rule.interval)
            }
        }
        Frequency::Weekly => {
            let days = rule.days();
            if days.is_empty() {
                format!("{prefix}Weekly")
            } else {
                format!("{prefix}Weekly on {}", join_day_names(days))
            }
        }
        Frequency::Monthly => {
            let month_days = rule.month_days();
            if month_days.is_empty() {
                format!("{prefix}Monthly on Day {}", start.day())
            } else {
                format!(
                    "{prefix}Monthly on the {}",
                    ordinal_days(month_days.iter().copied())
                )
            }
        }
        Frequency::Yearly => {
            // Entries outside 1..=12 have no name; fall back to the start month.
            let mut names: Vec<&str> = rule
                .months()
                .iter()
                .copied()
                .filter_map(month_name)
                .collect();
            if names.is_empty() {
                names.extend(month_name(start.month()));
            }
            let month_names = names.join(", ");
            let days = match rule.month_days() {
                [] => ordinal_days([start.day()]),
                days => ordinal_days(days.iter().copied()),
            };
            format!("{prefix}Annually in {month_names} on the {days}")
        }
    };

    if let Some(end) = explicit_end {
        text.push_str(&format!(", until {}", long_date(end)));
    } else if let Some(count) = rule.count {
        let unit = if count == 1 { "time" } else { "times" };
        text.push_str(&format!(", {count} {unit}"));
    } else if rule.never {
        text.push_str(", never ends");
    }

    text
}
