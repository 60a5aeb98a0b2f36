//! Core data models for gofinances
//!
//! Transactions, the category catalogue, money amounts and month selection.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, CATEGORIES};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::MonthPeriod;
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
