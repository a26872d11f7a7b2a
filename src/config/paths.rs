//! Path management for the expense tracker
//!
//! ## Data File Resolution Order
//!
//! 1. Explicit path (the `--file` flag)
//! 2. `EXPENSE_TRACKER_FILE` environment variable
//! 3. `expenses.json` in the current working directory
//!
//! ## Config Directory Resolution Order
//!
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable
//! 2. Platform config directory (`~/.config/expense-tracker` on Linux)

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Default file name for the persisted ledger
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Environment variable overriding the ledger file
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// The persisted ledger document
    data_file: PathBuf,
    /// Directory holding config.json
    config_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths, preferring `data_file` when given
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new(data_file: Option<PathBuf>) -> Result<Self, ExpenseError> {
        Self::resolve(
            data_file,
            env::var_os(DATA_FILE_ENV),
            env::var_os(CONFIG_DIR_ENV),
        )
    }

    /// Apply the resolution order to already-read override values
    fn resolve(
        data_file: Option<PathBuf>,
        env_file: Option<OsString>,
        env_config_dir: Option<OsString>,
    ) -> Result<Self, ExpenseError> {
        let data_file = data_file
            .or_else(|| env_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let config_dir = match env_config_dir {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_config_dir()?,
        };

        Ok(Self {
            data_file,
            config_dir,
        })
    }

    /// Create ExpensePaths with explicit locations (useful for testing)
    pub fn with_paths(data_file: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            data_file,
            config_dir,
        }
    }

    /// Get the ledger file path
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_config_dir(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_config_dir() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine config directory".into()))
}
