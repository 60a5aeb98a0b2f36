//! User settings for gofinances
//!
//! Manages user preferences: display locale (currency formatting and month
//! names), TUI colour theme and the date format used by the history list.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// Locale used for currency formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Brazilian Portuguese, Brazilian real (`R$ 1.234,56`)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English, US dollar (`$1,234.56`)
    #[serde(rename = "en-US")]
    EnUs,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt-br" | "pt_br" | "brl" => Ok(Self::PtBr),
            "en-us" | "en_us" | "usd" => Ok(Self::EnUs),
            other => Err(FinanceError::Config(format!("Unknown locale: {}", other))),
        }
    }
}

/// TUI colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(FinanceError::Config(format!("Unknown theme: {}", other))),
        }
    }
}

/// User settings for gofinances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale used for currency strings
    #[serde(default)]
    pub locale: Locale,

    /// Colour theme for the TUI
    #[serde(default)]
    pub theme: ThemeName,

    /// Date format for the history list (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Reject strftime formats chrono cannot render
pub fn validate_date_format(format: &str) -> Result<(), FinanceError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FinanceError::Config(format!(
            "Invalid date format: {}",
            format
        )));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            theme: ThemeName::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;
        validate_date_format(&settings.date_format)?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale, Locale::PtBr);
        assert_eq!(settings.theme, ThemeName::Dark);
        assert_eq!(settings.date_format, "%d/%m/%y");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::EnUs;
        settings.theme = ThemeName::Light;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::EnUs);
        assert_eq!(loaded.theme, ThemeName::Light);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale": "en-US"}"#).unwrap();
        assert_eq!(settings.locale, Locale::EnUs);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.date_format, "%d/%m/%y");
    }

    #[test]
    fn test_invalid_date_format_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
        assert!(validate_date_format("%Y-%m-%d %H:%M").is_ok());
        assert!(validate_date_format("%Q").is_err());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en-us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!(ThemeName::Dark.to_string(), "dark");
        assert!("solarized".parse::<ThemeName>().is_err());
    }
}
