//! Transaction service
//!
//! Registering new transactions from user input, listing and clearing.

use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, MoneyParseError, Transaction, TransactionType};
use crate::storage::Storage;

/// Raw input from the register form or the command line
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub name: String,
    /// Amount as typed by the user
    pub amount: String,
    pub kind: Option<TransactionType>,
    /// Category key or name
    pub category: Option<String>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate input and append a new transaction dated now
    ///
    /// Storage is left untouched when validation fails.
    pub fn register(&self, input: RegisterInput) -> FinanceResult<Transaction> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Name is required".into()));
        }

        let amount = Money::parse(&input.amount).map_err(|e| match e {
            MoneyParseError::Empty => FinanceError::Validation("Amount is required".into()),
            MoneyParseError::InvalidFormat(_) => {
                FinanceError::Validation("Amount must be a number".into())
            }
            MoneyParseError::OutOfRange(_) => FinanceError::Validation("Amount is too large".into()),
        })?;
        if !amount.is_positive() {
            return Err(FinanceError::Validation(
                "Amount must be a positive number".into(),
            ));
        }

        let kind = input
            .kind
            .ok_or_else(|| FinanceError::Validation("Select the transaction type".into()))?;

        let category_query = input
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| FinanceError::Validation("Select a category".into()))?;
        let category = Category::find_by_key_or_name(category_query)
            .ok_or_else(|| FinanceError::category_not_found(category_query))?;

        let transaction = Transaction::new(kind, name, amount, category.key);
        transaction
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.append(transaction.clone())?;

        info!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            category = category.key,
            "registered transaction"
        );

        Ok(transaction)
    }

    /// All transactions in storage order, optionally only the most recent `limit`
    pub fn list(&self, limit: Option<usize>) -> FinanceResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        if let Some(limit) = limit {
            let skip = transactions.len().saturating_sub(limit);
            transactions.drain(..skip);
        }
        Ok(transactions)
    }

    /// Remove every stored transaction, returning how many were removed
    pub fn clear(&self) -> FinanceResult<usize> {
        let count = self.storage.transactions.count()?;
        self.storage.transactions.clear()?;
        Ok(count)
    }
}
