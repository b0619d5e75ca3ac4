//! Command execution.
//!
//! Commands are executed against explicit inputs (including `now`) and return
//! their rendered output, leaving printing and exit codes to `main`.

use chrono::{DateTime, Utc};
use orgevents_core::recurrence::{
    create_default, describe, end_type, format_for_payload, monthly_options, recurrence_presets,
    rules_equal, validate,
};
use serde_json::json;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::error::Result;
use crate::input::{parse_rule_json, read_optional_rule, read_rule};
use crate::output::{format_output, pretty};

/// Rendered output of a command and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Run the parsed command.
pub fn execute(cli: &Cli, now: DateTime<Utc>) -> Result<Outcome> {
    let format = cli.format;

    match &cli.command {
        Commands::Default { start, frequency } => {
            let start = start.resolve(now);
            let rule = create_default(start, (*frequency).into());
            tracing::debug!(frequency = %rule.frequency, %start, "created default rule");
            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(&rule, format),
                OutputFormat::Pretty => pretty::format_rule(&rule, start),
            }))
        }
        Commands::Validate { start, rule } => {
            let start = start.resolve(now);
            let rule = read_rule(rule)?;
            let result = validate(&rule, start);
            let output = match format {
                OutputFormat::Json => format_output(&result, format),
                OutputFormat::Pretty => pretty::format_validation(&result),
            };
            Ok(Outcome {
                output,
                success: result.is_valid(),
            })
        }
        Commands::Describe { start, rule, until } => {
            let start = start.resolve(now);
            let rule = read_rule(rule)?;
            let text = describe(&rule, start, *until);
            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(&json!({ "description": text }), format),
                OutputFormat::Pretty => text,
            }))
        }
        Commands::Api { start, rule } => {
            let start = start.resolve(now);
            let rule = read_optional_rule(rule)?;
            let payload = format_for_payload(rule.as_ref(), start)?;
            Ok(Outcome::ok(format_output(&payload, format)))
        }
        Commands::Options { start } => {
            let start = start.resolve(now);
            let options = monthly_options(start);
            let presets = recurrence_presets(start);
            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(
                    &json!({ "monthly": options, "presets": presets }),
                    format,
                ),
                OutputFormat::Pretty => format!(
                    "{}\n\n{}",
                    pretty::format_monthly_options(&options),
                    pretty::format_presets(&presets)
                ),
            }))
        }
        Commands::EndType { rule } => {
            let rule = read_optional_rule(rule)?;
            let resolved = end_type(rule.as_ref());
            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(&json!({ "endType": resolved }), format),
                OutputFormat::Pretty => resolved.to_string(),
            }))
        }
        Commands::Equal { left, right } => {
            let left = parse_rule_json(left)?;
            let right = parse_rule_json(right)?;
            let equal = rules_equal(left.as_ref(), right.as_ref());
            let verdict = if equal { "equal" } else { "different" };
            Ok(Outcome {
                output: match format {
                    OutputFormat::Json => format_output(&json!({ "equal": equal }), format),
                    OutputFormat::Pretty => verdict.to_string(),
                },
                success: equal,
            })
        }
    }
}
