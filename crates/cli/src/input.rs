//! Reading rules from command-line input.

use std::io::Read;
use std::path::Path;

use orgevents_core::recurrence::{ApiRecurrenceRule, RecurrenceRule};

use crate::cli::args::RuleArgs;
use crate::error::{CliError, Result};

/// Parse a rule from its JSON wire shape. `null` means no rule.
pub fn parse_rule_json(json: &str) -> Result<Option<RecurrenceRule>> {
    let shape: Option<ApiRecurrenceRule> = serde_json::from_str(json)?;
    Ok(shape.map(ApiRecurrenceRule::into_rule).transpose()?)
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read the rule named by `args`, if any.
pub fn read_optional_rule(args: &RuleArgs) -> Result<Option<RecurrenceRule>> {
    let json = match (&args.rule, &args.file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => {
            tracing::debug!(path = %path.display(), "reading rule file");
            read_source(path)?
        }
        (None, None) => return Ok(None),
    };
    parse_rule_json(&json)
}

/// Read the rule named by `args`, failing when none was given.
pub fn read_rule(args: &RuleArgs) -> Result<RecurrenceRule> {
    read_optional_rule(args)?.ok_or(CliError::MissingRule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgevents_core::recurrence::{Frequency, RecurrenceError, WeekDay};

    #[test]
    fn test_parse_rule_json() {
        let rule = parse_rule_json(r#"{"frequency":"WEEKLY","interval":1,"never":true,"byDay":["MO"]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.by_day, Some(vec![WeekDay::MO]));
        assert!(rule.never);
    }

    #[test]
    fn test_parse_rule_json_null() {
        assert_eq!(parse_rule_json("null").unwrap(), None);
    }

    #[test]
    fn test_parse_rule_json_malformed() {
        assert!(matches!(
            parse_rule_json(r#"{"frequency":"HOURLY"}"#),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_parse_rule_json_bad_end_date() {
        assert!(matches!(
            parse_rule_json(r#"{"frequency":"DAILY","endDate":"later"}"#),
            Err(CliError::Recurrence(RecurrenceError::InvalidDate { .. }))
        ));
    }

    #[test]
    fn test_read_rule_missing() {
        assert!(matches!(
            read_rule(&RuleArgs::default()),
            Err(CliError::MissingRule)
        ));
    }

    #[test]
    fn test_read_rule_from_file() {
        let path = std::env::temp_dir().join(format!("orgevents-rule-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"frequency":"DAILY","count":3}"#).unwrap();

        let args = RuleArgs {
            rule: None,
            file: Some(path.clone()),
        };
        let rule = read_rule(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rule.count, Some(3));
        assert_eq!(rule.interval, 1);
    }
}
