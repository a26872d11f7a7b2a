//! YAML Export functionality
//!
//! Exports the complete ledger to YAML for a human-readable copy.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_ledger(ledger);
    let io = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(io)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io)?;
    writeln!(writer).map_err(io)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
