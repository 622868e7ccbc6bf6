//! Tests for `jwtgen --json`.

use crate::support::*;
use base64::{engine::general_purpose::STANDARD, Engine};

#[test]
fn test_json_report_is_consistent() {
    let output = run(&["--json"]);
    assert_success(&output);

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let secret = v["secret"].as_str().expect("secret is a string");

    assert_eq!(STANDARD.decode(secret).unwrap().len(), 32);
    assert_eq!(v["length"], secret.len());
    assert_eq!(v["encoding"], "Base64");
    assert_eq!(v["entropy_bits"], 256);
    assert_eq!(v["env"], format!("export JWT_SECRET='{}'", secret));
    assert_eq!(v["property"], format!("app.jwt.secret={}", secret));
}
