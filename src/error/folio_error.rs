//! Unified error type for the folio client.
//!
//! `FolioError` consolidates the domain-specific error types so that the
//! composition root and the CLI can handle every failure the same way.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::gateway::GatewayError;
use super::storage::StorageError;
use super::validation::ValidationError;
use crate::traits::CredentialsError;

/// Unified error type for the folio client.
#[derive(Debug)]
pub enum FolioError {
    /// Classified outbound request failure.
    Gateway(GatewayError),

    /// Local durable storage failure.
    Storage(StorageError),

    /// Credential store failure.
    Credentials(CredentialsError),

    /// Invalid configuration.
    Config(ConfigError),

    /// Rejected user input.
    Validation(ValidationError),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Gateway(err) => err.category(),
            FolioError::Storage(_) | FolioError::Credentials(_) => ErrorCategory::System,
            FolioError::Config(_) => ErrorCategory::Configuration,
            FolioError::Validation(_) => ErrorCategory::User,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            FolioError::Gateway(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Gateway(err) => err.user_message(),
            FolioError::Storage(_) | FolioError::Credentials(_) => {
                "Local settings could not be saved or read.".to_string()
            }
            FolioError::Config(err) => err.to_string(),
            FolioError::Validation(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Gateway(err) => err.error_code(),
            FolioError::Storage(err) => err.error_code(),
            FolioError::Credentials(_) => "CREDENTIALS",
            FolioError::Config(_) => "CONFIG",
            FolioError::Validation(_) => "VALIDATION",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Gateway(err) => write!(f, "{}", err),
            FolioError::Storage(err) => write!(f, "{}", err),
            FolioError::Credentials(err) => write!(f, "{}", err),
            FolioError::Config(err) => write!(f, "{}", err),
            FolioError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Gateway(err) => Some(err),
            FolioError::Storage(err) => Some(err),
            FolioError::Credentials(err) => Some(err),
            FolioError::Config(err) => Some(err),
            FolioError::Validation(err) => Some(err),
        }
    }
}

impl From<GatewayError> for FolioError {
    fn from(err: GatewayError) -> Self {
        FolioError::Gateway(err)
    }
}

impl From<StorageError> for FolioError {
    fn from(err: StorageError) -> Self {
        FolioError::Storage(err)
    }
}

impl From<CredentialsError> for FolioError {
    fn from(err: CredentialsError) -> Self {
        FolioError::Credentials(err)
    }
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err)
    }
}

impl From<ValidationError> for FolioError {
    fn from(err: ValidationError) -> Self {
        FolioError::Validation(err)
    }
}
