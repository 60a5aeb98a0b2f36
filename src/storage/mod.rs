//! Storage layer for gofinances
//!
//! A key-value store (JSON file on disk, or in memory) with the transaction
//! repository layered on top.

pub mod file_io;
pub mod kv;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use transactions::{TransactionRepository, TRANSACTIONS_KEY};

use std::sync::Arc;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Main storage coordinator that provides access to the repositories
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Open the on-disk store under the data directory
    pub fn open(paths: &FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;
        let store = FileStore::open(paths.storage_file())?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Storage backed by memory only
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Storage over any key-value store
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transactions: TransactionRepository::new(store.clone()),
            store,
        }
    }

    /// The underlying key-value store
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}
