//! Common error types for SQAD

use thiserror::Error;

/// Common result type for SQAD operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across SQAD crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure reaching the evaluation backend
    #[error("Backend network error: {0}")]
    Network(String),

    /// Evaluation backend answered with a non-success status
    #[error("Backend error {status}: {message}")]
    BackendStatus { status: u16, message: String },

    /// Response body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Backend HTTP status carried by this error, if any
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            Error::BackendStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
