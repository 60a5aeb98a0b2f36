//! Business logic layer for gofinances

pub mod transaction;

pub use transaction::{RegisterInput, TransactionService};
