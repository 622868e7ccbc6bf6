//! jwtgen - Generate a cryptographically secure JWT signing secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Generate and print a secret
//! │   ├── report        # Text and JSON report rendering
//! │   └── output        # Styled output helpers
//! └── core/             # Core library components
//!     ├── constants     # Secret size, entropy, printed names
//!     └── secret        # RandomSecret / EncodedSecret generation
//! ```
//!
//! # Example
//!
//! ```
//! let secret = jwtgen::core::generate_secret().unwrap();
//! assert_eq!(secret.len(), 44);
//! assert_eq!(secret.decode().unwrap().len(), 32);
//! ```

pub mod cli;
pub mod core;
pub mod error;
