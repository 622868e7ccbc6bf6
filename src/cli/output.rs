//! Shared CLI output helpers for consistent terminal output.
//!
//! Report helpers write to any `io::Write` sink and return its errors, so a
//! closed stdout surfaces as a failure instead of a panic.
//!
//! Color scheme (respects NO_COLOR and non-tty output):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Bold: headers, the secret itself
//! - Dimmed: rules

use console::style;
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;
const INDENT: &str = "   ";

/// Check if color output is enabled.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Write a bold title underlined with a rule.
///
/// Example:
/// ```text
/// JWT Secret Key Generator
/// ==================================================
/// ```
pub fn banner(w: &mut impl Write, title: &str) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{}", style(title).bold())?;
        writeln!(w, "{}", style("=".repeat(RULE_WIDTH)).dim())
    } else {
        writeln!(w, "{}", title)?;
        writeln!(w, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Write a success line with checkmark (green).
///
/// Example: `✓ generated`
pub fn success(w: &mut impl Write, msg: &str) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{} {}", style("✓").green(), msg)
    } else {
        writeln!(w, "✓ {}", msg)
    }
}

/// Write a warning header (yellow marker).
///
/// Example: `⚠ Security Notes`
pub fn warn(w: &mut impl Write, msg: &str) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{} {}", style("⚠").yellow(), style(msg).bold())
    } else {
        writeln!(w, "⚠ {}", msg)
    }
}

/// Write a blank line followed by a bold section header.
pub fn section(w: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(w)?;
    if colors_enabled() {
        writeln!(w, "{}", style(title).bold())
    } else {
        writeln!(w, "{}", title)
    }
}

/// Write an indented value, emphasized.
pub fn value(w: &mut impl Write, v: impl Display) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{INDENT}{}", style(v).bold())
    } else {
        writeln!(w, "{INDENT}{}", v)
    }
}

/// Write a numbered step.
///
/// Example: `   2. Set it as an environment variable:`
pub fn step(w: &mut impl Write, n: usize, text: &str) -> io::Result<()> {
    writeln!(w, "{INDENT}{}. {}", n, text)
}

/// Write a line nested under a step. Never styled, so it can be copied as-is.
///
/// Example: `      export JWT_SECRET='...'`
pub fn example(w: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(w, "{INDENT}{INDENT}{}", line)
}

/// Write a list item with bullet.
///
/// Example: `   • Rotate secrets periodically`
pub fn list_item(w: &mut impl Write, item: &str) -> io::Result<()> {
    writeln!(w, "{INDENT}• {}", item)
}

/// Write a labelled list item.
///
/// Example: `   • Length: 44 characters`
pub fn kv(w: &mut impl Write, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(w, "{INDENT}• {}: {}", label, value)
}

/// Print an error message to stderr (red).
///
/// Example: `✗ failed to write output`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check that the OS random device is available`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
