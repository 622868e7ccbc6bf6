//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Extract the secret from the report.
///
/// The secret is the line after the "Generated secure JWT secret:" line.
pub fn secret_from(output: &Output) -> String {
    let out = stdout(output);
    let mut lines = out.lines();
    lines
        .by_ref()
        .find(|l| l.contains("Generated secure JWT secret"))
        .expect("report has no secret header");
    lines
        .next()
        .expect("report has no secret line")
        .trim()
        .to_string()
}

/// Parse a labelled detail line such as `   • Length: 44 characters`.
pub fn detail(output: &Output, label: &str) -> String {
    let prefix = format!("• {}: ", label);
    stdout(output)
        .lines()
        .find_map(|l| l.trim().strip_prefix(&prefix).map(str::to_string))
        .unwrap_or_else(|| panic!("report has no '{}' detail", label))
}
