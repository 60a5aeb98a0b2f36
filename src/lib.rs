//! gofinances - personal income and expense tracker for the terminal
//!
//! Transactions (income or outcome, each with a category) are kept in a
//! small key-value store. The dashboard shows highlight cards and the
//! history; the summary screen breaks a month's expenses down by category
//! with totals and percentages.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, transactions and months
//! - `storage`: Key-value store and the transaction repository
//! - `services`: Registering and listing transactions
//! - `reports`: Dashboard highlights and the monthly category summary
//! - `display`: Currency formatting and terminal tables
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use gofinances::config::{FinancePaths, Settings};
//! use gofinances::display::CurrencyFormat;
//! use gofinances::models::MonthPeriod;
//! use gofinances::reports::ResumeReport;
//! use gofinances::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! let period: MonthPeriod = "2021-05".parse()?;
//! let report = ResumeReport::generate(&storage, period, CurrencyFormat::for_locale(settings.locale))?;
//! print!("{}", report.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinanceError, FinanceResult};
