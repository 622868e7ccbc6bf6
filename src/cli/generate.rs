//! Generate command.
//!
//! Draw a fresh secret from the OS and print it with usage guidance.

use std::io;
use tracing::{debug, info};

use crate::cli::report;
use crate::core::generate_secret;
use crate::error::Result;

/// Generate a secret and write the report to stdout.
pub fn execute(json: bool) -> Result<()> {
    info!("Generating signing secret");
    let secret = generate_secret()?;
    debug!(len = secret.len(), encoding = secret.encoding(), "secret generated");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        report::display_json(&secret, &mut out)
    } else {
        report::display(&secret, &mut out)
    }
}
