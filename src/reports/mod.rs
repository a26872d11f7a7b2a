//! Reports module for the expense tracker
//!
//! Provides the summary views built on the query engine:
//! - Budget status: current month spending against the monthly budget
//! - Monthly summary: totals per calendar month
//! - Category report: totals and shares per category

pub mod budget_status;
pub mod category;
pub mod monthly;

pub use budget_status::{BudgetLevel, BudgetStatus};
pub use category::{CategoryReport, CategorySpending};
pub use monthly::{MonthlySummary, MonthlyTotal};
