//! Key-value storage
//!
//! String keys mapping to string values, the same shape as the device
//! storage the transaction list has always lived in. [`FileStore`] keeps the
//! whole map in one JSON object on disk; [`MemoryStore`] is for tests and
//! throwaway sessions.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_json, write_json_atomic};

/// Minimal async-storage style interface
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key has never been written
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: String) -> FinanceResult<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> FinanceResult<()>;

    /// All keys currently present
    fn keys(&self) -> FinanceResult<Vec<String>>;
}

fn lock_poisoned(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("Storage lock poisoned: {}", e))
}

/// Key-value store persisted as a JSON object file
pub struct FileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store, loading any existing contents
    pub fn open(path: PathBuf) -> FinanceResult<Self> {
        let data: BTreeMap<String, String> = read_json(&path)?;
        debug!(path = %path.display(), keys = data.len(), "opened key-value store");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self, data: &BTreeMap<String, String>) -> FinanceResult<()> {
        write_json_atomic(&self.path, data)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        let previous = data.insert(key.to_string(), value);
        if let Err(e) = self.persist(&data) {
            // Keep memory in step with disk
            match previous {
                Some(old) => data.insert(key.to_string(), old),
                None => data.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        if let Some(old) = data.remove(key) {
            if let Err(e) = self.persist(&data) {
                data.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.keys().cloned().collect())
    }
}

/// In-memory key-value store
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> FinanceResult<Option<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> FinanceResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.remove(key);
        Ok(())
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.keys().cloned().collect())
    }
}
