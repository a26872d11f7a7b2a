//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger and reports.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_categories_command, handle_summary_command};

use std::io::IsTerminal;

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseId;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Colors only go to a terminal
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Parse an expense id argument ("12" or "#12")
pub fn parse_id(input: &str) -> ExpenseResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| ExpenseError::Parse(format!("Invalid expense ID: '{}'", input.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), ExpenseId::new(12));
        assert_eq!(parse_id("#3").unwrap(), ExpenseId::new(3));
        assert!(parse_id("abc").unwrap_err().is_parse());
    }
}
