//! JSON Export functionality
//!
//! Exports the complete ledger to JSON with schema versioning and metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Ledger, Money};
use crate::query::sum;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses in ledger order
    pub expenses: Vec<Expense>,

    pub next_id: ExpenseId,

    pub monthly_budget: Money,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    pub category_count: usize,

    /// Sum of every amount
    pub total_spent: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Snapshot a ledger for export
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let expenses = ledger.records().to_vec();

        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            category_count: ledger.categories().len(),
            total_spent: sum(&expenses),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            next_id: ledger.next_id(),
            monthly_budget: ledger.monthly_budget(),
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> ExpenseResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
