//! Constants used throughout jwtgen.
//!
//! Centralizes the fixed secret parameters and the names printed in the report.

/// Size of the raw secret in bytes.
pub const SECRET_BYTES: usize = 32;

/// Entropy of the raw secret in bits.
pub const ENTROPY_BITS: usize = SECRET_BYTES * 8;

/// Length of the padded Base64 form of `SECRET_BYTES` bytes.
pub const ENCODED_LEN: usize = (SECRET_BYTES + 2) / 3 * 4;

/// Encoding name shown in the report.
pub const ENCODING_NAME: &str = "Base64";

/// Environment variable the usage instructions export.
pub const ENV_VAR: &str = "JWT_SECRET";

/// Configuration-file property the usage instructions set.
pub const CONFIG_PROPERTY: &str = "app.jwt.secret";
