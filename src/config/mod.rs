//! Configuration module for gofinances
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (locale, theme, date format)

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{validate_date_format, Locale, Settings, ThemeName, DEFAULT_DATE_FORMAT};
