//! CLI error types.

use orgevents_core::recurrence::RecurrenceError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No recurrence rule given (use --rule or --file)")]
    MissingRule,

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),

    #[error("Invalid rule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
