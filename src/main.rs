//! jwtgen - Generate a cryptographically secure JWT signing secret.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jwtgen::cli::output;
use jwtgen::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_env("JWTGEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("jwtgen=debug")
        } else {
            EnvFilter::new("jwtgen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
