//! CLI commands for reports
//!
//! Prints the monthly and per-category summaries.

use std::io::{self, Write};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::reports::{CategoryReport, MonthlySummary};
use crate::storage::Storage;

/// Print monthly totals, newest month first
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let summary = MonthlySummary::generate(storage.ledger().records());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    summary.format_terminal(&mut out, &settings.currency_symbol)?;
    out.flush()?;

    Ok(())
}

/// Print per-category totals and shares
pub fn handle_categories_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    if storage.ledger().is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let report = CategoryReport::generate(storage.ledger().records());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.format_terminal(&mut out, &settings.currency_symbol)?;
    out.flush()?;

    Ok(())
}
