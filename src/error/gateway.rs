//! Gateway error taxonomy.
//!
//! Every outbound request ends in one of these four classifications, so the
//! callers only ever branch on what happened, never on transport details.

use thiserror::Error;

use super::category::ErrorCategory;

/// Classified failure of a gateway request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No response at all: connection refused, DNS failure, timeout.
    #[error("content service unreachable: {reason}")]
    Unreachable { reason: String },

    /// 401 or 403. The stored credential has already been deleted.
    #[error("authentication expired (HTTP {status})")]
    AuthExpired { status: u16 },

    /// Any other non-2xx response.
    #[error("request failed with HTTP {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// A response arrived but did not have the expected shape.
    #[error("malformed payload from {endpoint}: {message}")]
    MalformedPayload { endpoint: String, message: String },
}

impl GatewayError {
    /// Classify a non-2xx status that is not an auth failure.
    pub fn request_failed(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            "no response body".to_string()
        } else {
            body.chars().take(200).collect()
        };
        GatewayError::RequestFailed { status, message }
    }

    /// Whether the status code means the credential was rejected.
    pub fn is_auth_status(status: u16) -> bool {
        status == 401 || status == 403
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::Unreachable { .. } => ErrorCategory::Network,
            GatewayError::AuthExpired { .. } => ErrorCategory::Auth,
            GatewayError::RequestFailed { status, .. } if *status >= 500 => ErrorCategory::Server,
            GatewayError::RequestFailed { .. } => ErrorCategory::Client,
            GatewayError::MalformedPayload { .. } => ErrorCategory::Client,
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Unreachable { .. } => true,
            GatewayError::RequestFailed { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            GatewayError::AuthExpired { .. } | GatewayError::MalformedPayload { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Unreachable { .. } => "GW_UNREACHABLE",
            GatewayError::AuthExpired { .. } => "GW_AUTH_EXPIRED",
            GatewayError::RequestFailed { .. } => "GW_REQUEST_FAILED",
            GatewayError::MalformedPayload { .. } => "GW_MALFORMED_PAYLOAD",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Unreachable { .. } => {
                "The server is not responding. Please try again later.".to_string()
            }
            GatewayError::AuthExpired { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            GatewayError::RequestFailed { status, .. } => match *status {
                400 => "The request was invalid. Please check the form and try again.".to_string(),
                404 => "The requested resource was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!(
                    "The server returned an error (HTTP {}). Please try again.",
                    status
                ),
            },
            GatewayError::MalformedPayload { .. } => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }
}
