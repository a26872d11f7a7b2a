//! Query engine for expenses
//!
//! Pure functions over a slice of expenses: filtering, ordering, grouping
//! and totals. Nothing here touches the ledger or the terminal, so every
//! menu view is built by composing these.

pub mod aggregate;
pub mod filter;

pub use aggregate::{
    budget_percent, current_month_total, group_by_category, group_by_year_month, sum,
};
pub use filter::{
    filter_by_category, filter_by_date_range, filter_by_keyword, filter_by_min_amount,
    filter_expensive, sort_by_date_desc, top_n_by_amount, ExpenseFilter,
};
