//! File-backed key/value store.
//!
//! Values live in a single JSON object at `~/.folio/storage.json`. A missing
//! or unreadable file reads as empty; the next write replaces it.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// The storage directory name under the home directory.
const STORAGE_DIR: &str = ".folio";

/// The storage file name.
const STORAGE_FILE: &str = "storage.json";

/// JSON-file key/value store.
///
/// Every operation reads the file fresh, so several processes sharing the
/// file see each other's writes. Writes within one process are serialized.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Store in `~/.folio/storage.json`.
    pub fn new() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or(StorageError::NoStorageDir)?;
        Ok(Self::in_dir(home.join(STORAGE_DIR)))
    }

    /// Store in `<dir>/storage.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Storage file unreadable");
                return BTreeMap::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Storage file corrupt, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn save_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)?;
        writer.flush().map_err(io_err)
    }

    fn update<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        let mut map = self.load_map();
        if f(&mut map) {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map().remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|map| map.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path());
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path().join("nested"));
        store.set("theme", "light").unwrap();
        assert!(store.path().exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path());
        store.set("theme", "dark").unwrap();
        store.set("token", "abc").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path());
        assert!(store.remove("token").is_ok());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_two_handles_share_the_file() {
        let dir = TempDir::new().unwrap();
        let first = FileStore::in_dir(dir.path());
        let second = FileStore::in_dir(dir.path());
        first.set("token", "shared").unwrap();
        assert_eq!(second.get("token").unwrap().as_deref(), Some("shared"));
    }
}
