//! orgevents_cli - command-line shell over the recurrence engine.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use commands::{execute, Outcome};
pub use error::{CliError, Result};
