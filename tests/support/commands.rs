//! Command helpers.

use assert_cmd::Command;
use std::process::Output;

/// Create a jwtgen command with a predictable environment.
///
/// Colors are off and any inherited log filter is removed so stdout and
/// stderr are plain and stable.
pub fn jwtgen() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("jwtgen").expect("failed to find jwtgen binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("JWTGEN_LOG");
    cmd
}

/// Run jwtgen with the given arguments.
pub fn run(args: &[&str]) -> Output {
    jwtgen().args(args).output().expect("failed to run jwtgen")
}
