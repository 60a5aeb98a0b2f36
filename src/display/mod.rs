//! Display formatting for terminal output
//!
//! Currency strings, tables and small text helpers shared by the CLI and
//! the TUI.

pub mod currency;
pub mod report;
pub mod transaction;

pub use currency::CurrencyFormat;
pub use transaction::{format_category_table, format_history_table};
