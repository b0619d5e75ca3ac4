//! Arguments shared between commands.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use orgevents_core::recurrence::Frequency;
use orgevents_core::serde::parse_datetime;

/// Parse a date argument (RFC 3339 or YYYY-MM-DD).
pub fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
    parse_datetime(value).map_err(|e| format!("invalid date '{value}': {e}"))
}

/// Event start date.
#[derive(Debug, Clone, Args)]
pub struct StartArgs {
    /// Event start (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, env = "ORGEVENTS_START", value_parser = parse_date_arg)]
    pub start: Option<DateTime<Utc>>,
}

impl StartArgs {
    /// Resolve the start date, falling back to `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start.unwrap_or(now)
    }
}

/// Where to read a rule from.
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Rule as JSON in the API wire shape.
    #[arg(long, conflicts_with = "file")]
    pub rule: Option<String>,

    /// Path to a JSON rule file (`-` for stdin).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// CLI frequency (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<FrequencyArg> for Frequency {
    fn from(f: FrequencyArg) -> Self {
        match f {
            FrequencyArg::Daily => Frequency::Daily,
            FrequencyArg::Weekly => Frequency::Weekly,
            FrequencyArg::Monthly => Frequency::Monthly,
            FrequencyArg::Yearly => Frequency::Yearly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-07-21T10:00:00Z"),
            Ok(Utc.with_ymd_and_hms(2024, 7, 21, 10, 0, 0).unwrap())
        );
        assert!(parse_date_arg("tomorrow").is_err());
    }

    #[test]
    fn test_start_args_resolve() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(StartArgs { start: None }.resolve(now), now);

        let start = Utc.with_ymd_and_hms(2024, 7, 21, 10, 0, 0).unwrap();
        assert_eq!(StartArgs { start: Some(start) }.resolve(now), start);
    }

    #[test]
    fn test_frequency_arg_conversion() {
        assert_eq!(Frequency::from(FrequencyArg::Yearly), Frequency::Yearly);
        assert_eq!(Frequency::from(FrequencyArg::Daily), Frequency::Daily);
    }
}
