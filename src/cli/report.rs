//! Rendering of a generated secret.
//!
//! The text report carries the secret, two ways to install it, security
//! reminders, and the secret's length, encoding and entropy. The JSON report
//! carries the same facts for scripts.

use serde::Serialize;
use std::io::Write;

use crate::cli::output;
use crate::core::constants::{CONFIG_PROPERTY, ENV_VAR};
use crate::core::EncodedSecret;
use crate::error::Result;

const TITLE: &str = "🔐 JWT Secret Key Generator";

const SECURITY_NOTES: &[&str] = &[
    "Keep this secret confidential",
    "Use environment variables in production",
    "Rotate secrets periodically",
    "Never commit secrets to version control",
];

/// Shell line exporting the secret.
pub fn env_line(secret: &EncodedSecret) -> String {
    format!("export {}='{}'", ENV_VAR, secret)
}

/// Properties-file line setting the secret.
pub fn property_line(secret: &EncodedSecret) -> String {
    format!("{}={}", CONFIG_PROPERTY, secret)
}

/// Write the human-readable report and flush.
///
/// # Errors
///
/// Returns `Error::Output` if the sink rejects a write.
pub fn display(secret: &EncodedSecret, w: &mut impl Write) -> Result<()> {
    output::banner(w, TITLE)?;

    writeln!(w)?;
    output::success(w, "Generated secure JWT secret:")?;
    output::value(w, secret)?;

    output::section(w, "📝 Usage Instructions:")?;
    output::step(w, 1, "Copy the secret above")?;
    output::step(w, 2, "Set it as an environment variable:")?;
    output::example(w, &env_line(secret))?;
    output::step(w, 3, "Or add it to your application properties:")?;
    output::example(w, &property_line(secret))?;

    writeln!(w)?;
    output::warn(w, "Security Notes:")?;
    for note in SECURITY_NOTES {
        output::list_item(w, note)?;
    }

    output::section(w, "🔍 Secret Details:")?;
    output::kv(w, "Length", format!("{} characters", secret.len()))?;
    output::kv(w, "Encoding", secret.encoding())?;
    output::kv(w, "Entropy", format!("{} bits", secret.entropy_bits()))?;

    w.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    secret: &'a str,
    length: usize,
    encoding: &'a str,
    entropy_bits: usize,
    env: String,
    property: String,
}

/// Write the report as a pretty-printed JSON object and flush.
pub fn display_json(secret: &EncodedSecret, w: &mut impl Write) -> Result<()> {
    let report = JsonReport {
        secret: secret.as_str(),
        length: secret.len(),
        encoding: secret.encoding(),
        entropy_bits: secret.entropy_bits(),
        env: env_line(secret),
        property: property_line(secret),
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
