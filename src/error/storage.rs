//! Local storage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing client-local durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The home directory could not be determined.
    #[error("could not determine a storage directory")]
    NoStorageDir,

    /// Reading or writing the storage file failed.
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file could not be serialized.
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store is unavailable (used by test doubles and poisoned locks).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoStorageDir => "STORE_NO_DIR",
            StorageError::Io { .. } => "STORE_IO",
            StorageError::Serialization(_) => "STORE_SERDE",
            StorageError::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}
