//! CLI commands for data export
//!
//! Writes the ledger to a file in CSV, JSON or YAML.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    let ledger = storage.ledger();

    match format {
        ExportFormat::Csv => {
            csv::export_expenses_csv(ledger.records(), &mut writer)?;
            println!("Exported {} expenses to: {}", ledger.len(), output.display());
        }
        ExportFormat::Json => {
            json::export_full_json(ledger, &mut writer, true)?;
            println!("Ledger exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(ledger, &mut writer)?;
            println!("Ledger exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
