//! Tests for argument errors and process exit codes.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_unknown_flag_fails() {
    jwtgen()
        .arg("--length")
        .arg("64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--length"));
}

#[test]
fn test_version_flag() {
    jwtgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let output = run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "--json");
    assert_stdout_contains(&output, "--verbose");
}
