//! orgevents CLI entry point.

use chrono::Utc;
use clap::Parser;
use orgevents_cli::cli::Cli;
use orgevents_cli::execute;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "orgevents=warn,orgevents_cli=warn,orgevents_core=warn"
    } else {
        "orgevents=info,orgevents_cli=info,orgevents_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let outcome = match execute(&cli, Utc::now()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!("{}", outcome.output);

    if !outcome.success {
        std::process::exit(1);
    }
}
