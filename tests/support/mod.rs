//! Test support utilities for jwtgen integration tests.
//!
//! Provides a command builder with a clean environment and output helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use commands::*;
