use super::types::{EndType, RecurrenceRule};

fn sorted<T: Ord + Copy>(values: &[T]) -> Vec<T> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

/// Compares two optional rules, treating the qualifier lists as unordered.
///
/// Scalars compare by value and `end_date` by instant. A missing qualifier
/// list is the same as an empty one.
pub fn rules_equal(a: Option<&RecurrenceRule>, b: Option<&RecurrenceRule>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.frequency == b.frequency
                && a.interval == b.interval
                && a.never == b.never
                && a.count == b.count
                && a.end_date == b.end_date
                && sorted(a.days()) == sorted(b.days())
                && sorted(a.months()) == sorted(b.months())
                && sorted(a.month_days()) == sorted(b.month_days())
        }
        _ => false,
    }
}

/// Resolves which end option a rule represents: `never`, then `on`, then
/// `after`, defaulting to `never` (also for no rule at all).
pub fn end_type(rule: Option<&RecurrenceRule>) -> EndType {
    match rule {
        Some(rule) if rule.never => EndType::Never,
        Some(rule) if rule.end_date.is_some() => EndType::On,
        Some(rule) if rule.count.is_some() => EndType::After,
        _ => EndType::Never,
    }
}
