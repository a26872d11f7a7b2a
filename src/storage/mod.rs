//! Storage layer for the expense tracker
//!
//! Persists the whole ledger as one JSON document. Loading never fails: a
//! missing file gives an empty ledger, and an unreadable or malformed file
//! gives an empty ledger plus a [`LoadWarning`]. Saving writes atomically
//! and reports errors to the caller.

pub mod decode;
pub mod file_io;

pub use decode::decode_ledger;
pub use file_io::{read_json_value, write_json_atomic};

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ExpenseResult;
use crate::models::Ledger;

/// A recoverable problem found while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// File that failed to load
    pub path: PathBuf,
    /// What went wrong
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not load {} ({}). Starting fresh.",
            self.path.display(),
            self.message
        )
    }
}

/// Result of [`load`]: always a ledger, sometimes a warning
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub ledger: Ledger,
    pub warning: Option<LoadWarning>,
}

/// Load a ledger from `path`
pub fn load<P: AsRef<Path>>(path: P) -> LoadOutcome {
    let path = path.as_ref();

    let decoded = read_json_value(path).and_then(|doc| doc.map(|v| decode_ledger(&v)).transpose());

    match decoded {
        Ok(Some(ledger)) => {
            info!(path = %path.display(), expenses = ledger.len(), "ledger loaded");
            LoadOutcome {
                ledger,
                warning: None,
            }
        }
        Ok(None) => {
            info!(path = %path.display(), "no ledger file, starting empty");
            LoadOutcome {
                ledger: Ledger::new(),
                warning: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ledger could not be loaded, starting empty");
            LoadOutcome {
                ledger: Ledger::new(),
                warning: Some(LoadWarning {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                }),
            }
        }
    }
}

/// Save `ledger` to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(ledger: &Ledger, path: P) -> ExpenseResult<()> {
    let path = path.as_ref();
    write_json_atomic(path, ledger)?;
    info!(path = %path.display(), expenses = ledger.len(), "ledger saved");
    Ok(())
}

/// Main storage coordinator: a ledger bound to the file it came from
pub struct Storage {
    path: PathBuf,
    ledger: Ledger,
}

impl Storage {
    /// Load the ledger at `path`
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<LoadWarning>) {
        let path = path.into();
        let LoadOutcome { ledger, warning } = load(&path);
        (Self { path, ledger }, warning)
    }

    /// Get the file backing this storage
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Get the ledger for mutation
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Write the ledger back to its file
    pub fn save(&self) -> ExpenseResult<()> {
        save(&self.ledger, &self.path)
    }
}
