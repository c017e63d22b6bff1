//! Configuration errors.

use thiserror::Error;

/// An environment variable held a value the client cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("HTTP transport could not be built: {message}")]
    Transport { message: String },
}
