//! Error types for jwtgen.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Suggested next step for the operator, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Entropy(_) => {
                Some("check that the OS random device (e.g. /dev/urandom) is available")
            }
            Error::Output(_) | Error::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
