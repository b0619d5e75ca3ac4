use chrono::{DateTime, Datelike, Utc};

use super::calendar::weekday_of;
use super::types::{EndCondition, Frequency, RecurrenceRule};

/// Builds the minimal never-ending rule for `frequency`, seeded from the UTC
/// calendar components of `start`.
///
/// The result always passes [`validate`](super::validate) for the same `start`.
pub fn create_default(start: DateTime<Utc>, frequency: Frequency) -> RecurrenceRule {
    let rule = RecurrenceRule::new(frequency).with_end_condition(EndCondition::Never);
    seed_qualifiers(rule, start)
}

/// Replaces the byDay/byMonth/byMonthDay qualifiers with the ones `start`
/// implies for the rule's frequency.
pub(crate) fn seed_qualifiers(mut rule: RecurrenceRule, start: DateTime<Utc>) -> RecurrenceRule {
    rule.by_day = None;
    rule.by_month = None;
    rule.by_month_day = None;

    match rule.frequency {
        Frequency::Daily => rule,
        Frequency::Weekly => rule.with_by_day([weekday_of(start)]),
        Frequency::Monthly => rule.with_by_month_day([start.day()]),
        Frequency::Yearly => rule
            .with_by_month([start.month()])
            .with_by_month_day([start.day()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::types::WeekDay;
    use crate::recurrence::validate;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 21, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_create_default_daily() {
        let rule = create_default(start(), Frequency::Daily);
        assert_eq!(rule, RecurrenceRule::new(Frequency::Daily).with_never(true));
    }

    #[test]
    fn test_create_default_weekly() {
        let rule = create_default(start(), Frequency::Weekly);
        assert_eq!(rule.by_day, Some(vec![WeekDay::SU]));
        assert_eq!(rule.by_month, None);
        assert_eq!(rule.by_month_day, None);
    }

    #[test]
    fn test_create_default_monthly() {
        let rule = create_default(start(), Frequency::Monthly);
        assert_eq!(rule.by_month_day, Some(vec![21]));
        assert_eq!(rule.by_day, None);
    }

    #[test]
    fn test_create_default_yearly() {
        let rule = create_default(start(), Frequency::Yearly);
        assert_eq!(
            rule,
            RecurrenceRule::new(Frequency::Yearly)
                .with_never(true)
                .with_by_month([7])
                .with_by_month_day([21])
        );
    }

    #[test]
    fn test_create_default_uses_utc_components() {
        // 23:30 UTC on Dec 31 is already Jan 1 east of UTC; the seed must not move.
        let late = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let rule = create_default(late, Frequency::Yearly);
        assert_eq!(rule.by_month, Some(vec![12]));
        assert_eq!(rule.by_month_day, Some(vec![31]));

        let weekly = create_default(late, Frequency::Weekly);
        assert_eq!(weekly.by_day, Some(vec![WeekDay::TU]));
    }

    #[test]
    fn test_create_default_always_validates() {
        let starts = [
            start(),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        ];
        for start in starts {
            for frequency in Frequency::ALL {
                let rule = create_default(start, frequency);
                let result = validate(&rule, start);
                assert!(result.is_valid(), "{frequency} at {start}: {result:?}");
            }
        }
    }
}
