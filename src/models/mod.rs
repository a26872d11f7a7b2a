//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its id and amount types, the calendar month used for
//! summaries, and the ledger that owns them.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;

pub use expense::{
    normalize_category, parse_amount, parse_date, Expense, ExpensePatch, DEFAULT_CATEGORY,
};
pub use ids::ExpenseId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use period::YearMonth;
