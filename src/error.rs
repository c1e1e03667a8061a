//! Unified error type for gridgen.

use thiserror::Error;

/// Errors that can occur while generating a grid file.
#[derive(Debug, Error)]
pub enum GridError {
    /// An I/O error occurred (missing or unwritable output directory, etc).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
