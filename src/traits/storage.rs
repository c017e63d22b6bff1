//! Durable key/value storage abstraction.
//!
//! The client keeps two optional values between sessions, `theme` and
//! `token`. Both the preference store and the stored-credentials adapter
//! read and write them through this trait.

use crate::error::StorageError;

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Client-local durable key/value storage.
///
/// Reads of absent keys return `Ok(None)`. Removing an absent key succeeds.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
