//! Credentials provider backed by the local key/value store.
//!
//! The bearer token lives under the `token` key next to the theme, the way
//! the browser client keeps both in local storage.

use async_trait::async_trait;
use std::sync::Arc;

use crate::traits::{Credential, CredentialsError, CredentialsProvider, KeyValueStore, TOKEN_KEY};

/// Credentials provider storing the token in a [`KeyValueStore`].
///
/// # Example
///
/// ```ignore
/// use folio::adapters::{FileStore, StoredCredentials};
///
/// let store = Arc::new(FileStore::new()?);
/// let credentials = StoredCredentials::new(store);
/// if let Some(credential) = credentials.load().await? {
///     println!("signed in");
/// }
/// ```
#[derive(Clone)]
pub struct StoredCredentials {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCredentials {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials").finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialsProvider for StoredCredentials {
    async fn load(&self) -> Result<Option<Credential>, CredentialsError> {
        let token = self
            .store
            .get(TOKEN_KEY)
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?;

        // A blank token is the same as no token
        Ok(token
            .filter(|t| !t.trim().is_empty())
            .map(Credential::new))
    }

    async fn save(&self, credential: &Credential) -> Result<(), CredentialsError> {
        self.store
            .set(TOKEN_KEY, credential.token())
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.store
            .remove(TOKEN_KEY)
            .map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}
