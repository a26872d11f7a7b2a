//! Export module for the expense tracker
//!
//! Writes the ledger out in three formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable full export with metadata
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
