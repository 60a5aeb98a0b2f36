//! Transaction repository
//!
//! The whole transaction list is one JSON array stored under a single key.
//! Writes replace the list wholesale; nothing is edited in place.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

use super::kv::KeyValueStore;

/// Storage key holding the serialized transaction list
pub const TRANSACTIONS_KEY: &str = "@gofinances:transactions";

/// Repository for the transaction list
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read every stored transaction, in insertion order
    ///
    /// A missing key means no transactions yet.
    pub fn get_all(&self) -> FinanceResult<Vec<Transaction>> {
        let Some(raw) = self.store.get_item(TRANSACTIONS_KEY)? else {
            return Ok(Vec::new());
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let transactions: Vec<Transaction> = serde_json::from_str(&raw).map_err(|e| {
            FinanceError::Storage(format!("Failed to parse stored transactions: {}", e))
        })?;

        debug!(count = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    /// Replace the stored list
    pub fn replace_all(&self, transactions: &[Transaction]) -> FinanceResult<()> {
        let raw = serde_json::to_string(transactions)?;
        self.store.set_item(TRANSACTIONS_KEY, raw)?;
        debug!(count = transactions.len(), "saved transactions");
        Ok(())
    }

    /// Append one transaction by rewriting the list
    pub fn append(&self, transaction: Transaction) -> FinanceResult<()> {
        let mut transactions = self.get_all()?;
        transactions.push(transaction);
        self.replace_all(&transactions)
    }

    /// Remove every transaction
    pub fn clear(&self) -> FinanceResult<()> {
        self.store.remove_item(TRANSACTIONS_KEY)?;
        info!("cleared all transactions");
        Ok(())
    }

    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.get_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use crate::storage::kv::MemoryStore;

    fn create_test_repo() -> (Arc<MemoryStore>, TransactionRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = TransactionRepository::new(store.clone());
        (store, repo)
    }

    fn expense(name: &str, cents: i64) -> Transaction {
        Transaction::new(
            TransactionType::Negative,
            name,
            Money::from_cents(cents),
            "food",
        )
    }

    #[test]
    fn test_empty_storage_is_empty_list() {
        let (_store, repo) = create_test_repo();
        assert!(repo.get_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let (_store, repo) = create_test_repo();
        repo.append(expense("first", 100)).unwrap();
        repo.append(expense("second", 200)).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_stored_as_single_array_under_key() {
        let (store, repo) = create_test_repo();
        repo.append(expense("lunch", 2500)).unwrap();

        let raw = store.get_item(TRANSACTIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["amount"], "25.00");
    }

    #[test]
    fn test_clear() {
        let (store, repo) = create_test_repo();
        repo.append(expense("lunch", 2500)).unwrap();
        repo.clear().unwrap();

        assert!(store.get_item(TRANSACTIONS_KEY).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_malformed_blob_is_error() {
        let (store, repo) = create_test_repo();
        store.set_item(TRANSACTIONS_KEY, "{not an array".into()).unwrap();

        assert!(matches!(repo.get_all(), Err(FinanceError::Storage(_))));
    }
}
