//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for the terminal,
//! including tables, colors, and budget indicators.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_register, format_expense_row, RegisterStyle};
pub use report::{
    format_bar, format_budget_details, format_budget_status, format_percentage, separator,
    truncate,
};
