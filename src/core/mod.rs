//! Core library components.
//!
//! Secret generation and the fixed parameters it uses. Nothing here touches
//! the terminal.

pub mod constants;
pub mod secret;

pub use secret::{generate_secret, generate_secret_with, EncodedSecret, RandomSecret};
