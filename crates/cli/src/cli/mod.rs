//! CLI command definitions.

pub mod args;

use clap::{Parser, Subcommand, ValueEnum};

use args::{FrequencyArg, RuleArgs, StartArgs};

/// Recurrence rule tools for organization events.
#[derive(Debug, Parser)]
#[command(name = "orgevents")]
#[command(version, about = "Recurrence rule tools for organization events", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "ORGEVENTS_FORMAT", default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the default rule for a frequency.
    Default {
        #[command(flatten)]
        start: StartArgs,
        /// Repeat unit.
        #[arg(long, value_enum)]
        frequency: FrequencyArg,
    },
    /// Check a rule against its invariants.
    Validate {
        #[command(flatten)]
        start: StartArgs,
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Render a rule as a sentence.
    Describe {
        #[command(flatten)]
        start: StartArgs,
        #[command(flatten)]
        rule: RuleArgs,
        /// Explicit end date for the "until" clause (RFC 3339 or YYYY-MM-DD).
        #[arg(long, value_parser = args::parse_date_arg)]
        until: Option<chrono::DateTime<chrono::Utc>>,
    },
    /// Validate a rule and print its submission payload.
    Api {
        #[command(flatten)]
        start: StartArgs,
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Show the monthly anchoring choices and quick-pick presets for a start date.
    Options {
        #[command(flatten)]
        start: StartArgs,
    },
    /// Show which end option a rule represents.
    EndType {
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Compare two rules, ignoring qualifier order.
    Equal {
        /// First rule as JSON (`null` for none).
        #[arg(long)]
        left: String,
        /// Second rule as JSON (`null` for none).
        #[arg(long)]
        right: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_command() {
        let cli = Cli::try_parse_from([
            "orgevents",
            "default",
            "--frequency",
            "weekly",
            "--start",
            "2024-07-21T10:00:00Z",
        ])
        .unwrap();

        match cli.command {
            Commands::Default { start, frequency } => {
                assert_eq!(frequency, FrequencyArg::Weekly);
                assert!(start.start.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_parse_global_format_after_subcommand() {
        let cli = Cli::try_parse_from([
            "orgevents",
            "options",
            "--start",
            "2024-07-15",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_bad_start() {
        let result = Cli::try_parse_from(["orgevents", "options", "--start", "whenever"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rule_and_file_conflict() {
        let result = Cli::try_parse_from([
            "orgevents",
            "validate",
            "--rule",
            "{}",
            "--file",
            "rule.json",
        ]);
        assert!(result.is_err());
    }
}
