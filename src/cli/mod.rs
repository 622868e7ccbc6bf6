//! Command-line interface.

pub mod generate;
pub mod output;
pub mod report;

use clap::Parser;

/// jwtgen - Generate a secure signing secret for JWT tokens.
#[derive(Parser, Debug)]
#[command(
    name = "jwtgen",
    about = "Generate a cryptographically secure 256-bit JWT signing secret",
    version,
    after_help = "The secret is printed once and never stored. Keep it somewhere safe."
)]
pub struct Cli {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show debug output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    generate::execute(cli.json)
}
