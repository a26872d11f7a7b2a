//! User settings for the expense tracker
//!
//! Manages display preferences and the thresholds used by the list and
//! budget views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Money;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Amounts strictly above this are treated as expensive
    #[serde(default = "default_expensive_threshold")]
    pub expensive_threshold: Money,

    /// Percent of budget above which the status turns to a warning
    #[serde(default = "default_warning_percent")]
    pub budget_warning_percent: Decimal,

    /// Default number of rows for `list` (None = unlimited)
    #[serde(default)]
    pub default_list_limit: Option<usize>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_expensive_threshold() -> Money {
    Money::from_whole(100)
}

fn default_warning_percent() -> Decimal {
    Decimal::from(80)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            expensive_threshold: default_expensive_threshold(),
            budget_warning_percent: default_warning_percent(),
            default_list_limit: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_config_dir()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn test_paths(temp_dir: &TempDir) -> ExpensePaths {
        ExpensePaths::with_paths(
            temp_dir.path().join("expenses.json"),
            temp_dir.path().join("config"),
        )
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.expensive_threshold, Money::from_whole(100));
        assert_eq!(settings.budget_warning_percent, dec!(80));
        assert_eq!(settings.default_list_limit, None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.expensive_threshold = Money::new(dec!(250.50));

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.expensive_threshold, Money::new(dec!(250.50)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.budget_warning_percent, dec!(80));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_create(&test_paths(&temp_dir)).unwrap();
        assert_eq!(loaded.schema_version, 1);
    }
}
