//! In-memory credentials provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{Credential, CredentialsError, CredentialsProvider};

/// In-memory credentials provider for testing.
///
/// Clones share the stored credential.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    /// Stored credential
    credential: Arc<Mutex<Option<Credential>>>,
    /// Whether clear should fail
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryCredentials {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding `token`.
    pub fn with_token(token: &str) -> Self {
        let provider = Self::new();
        provider.set_credential(Some(Credential::new(token)));
        provider
    }

    /// Configure whether clear should fail.
    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }

    /// Get the current credential synchronously (for testing).
    pub fn get_credential(&self) -> Option<Credential> {
        self.credential.lock().unwrap().clone()
    }

    /// Set the credential synchronously (for testing).
    pub fn set_credential(&self, credential: Option<Credential>) {
        *self.credential.lock().unwrap() = credential;
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credential>, CredentialsError> {
        Ok(self.credential.lock().unwrap().clone())
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialsError> {
        *self.credential.lock().unwrap() = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(CredentialsError::ClearFailed("Mock clear failure".to_string()));
        }

        *self.credential.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_clear() {
        let provider = InMemoryCredentials::new();
        assert!(provider.load().await.unwrap().is_none());

        provider.save(&Credential::new("t")).await.unwrap();
        assert_eq!(provider.load().await.unwrap(), Some(Credential::new("t")));

        provider.clear().await.unwrap();
        assert!(provider.get_credential().is_none());
    }

    #[tokio::test]
    async fn test_clear_failure_keeps_credential() {
        let provider = InMemoryCredentials::with_token("t");
        provider.set_clear_should_fail(true);
        assert!(provider.clear().await.is_err());
        assert!(provider.get_credential().is_some());
    }
}
