//! Credentials provider trait abstraction.
//!
//! Provides a trait-based abstraction for bearer credential storage and
//! retrieval, enabling dependency injection and mocking in tests.

use async_trait::async_trait;
use std::fmt;

/// An opaque bearer token proving an authenticated session.
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Credentials operation errors.
#[derive(Debug, Clone)]
pub enum CredentialsError {
    /// Failed to load credentials
    LoadFailed(String),
    /// Failed to save credentials
    SaveFailed(String),
    /// Failed to clear credentials
    ClearFailed(String),
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialsError::LoadFailed(msg) => write!(f, "Failed to load credentials: {}", msg),
            CredentialsError::SaveFailed(msg) => write!(f, "Failed to save credentials: {}", msg),
            CredentialsError::ClearFailed(msg) => {
                write!(f, "Failed to clear credentials: {}", msg)
            }
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Trait for credential storage and retrieval.
///
/// Implementations include [`crate::adapters::StoredCredentials`], which keeps
/// the token under the `token` key of the local store, and the in-memory mock.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Load the stored credential.
    ///
    /// # Returns
    /// - `Ok(Some(credential))` if a token is stored
    /// - `Ok(None)` if no token is stored
    /// - `Err(error)` if reading storage failed
    async fn load(&self) -> Result<Option<Credential>, CredentialsError>;

    /// Replace the stored credential.
    async fn save(&self, credential: &Credential) -> Result<(), CredentialsError>;

    /// Delete the stored credential. Deleting an absent credential succeeds.
    async fn clear(&self) -> Result<(), CredentialsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let credential = Credential::new("abc123");
        assert_eq!(credential.bearer_header(), "Bearer abc123");
        assert_eq!(credential.token(), "abc123");
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::new("super-secret");
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_credentials_error_display() {
        assert_eq!(
            CredentialsError::LoadFailed("read error".to_string()).to_string(),
            "Failed to load credentials: read error"
        );
        assert_eq!(
            CredentialsError::ClearFailed("locked".to_string()).to_string(),
            "Failed to clear credentials: locked"
        );
    }
}
