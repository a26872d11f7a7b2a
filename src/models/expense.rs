//! Expense model
//!
//! A single recorded expenditure, and the patch type used to edit one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Category given to expenses entered without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Normalize a user-supplied category: blank becomes [`DEFAULT_CATEGORY`]
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a calendar date from user input or a stored document
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, and ISO date-times such as
/// `2024-01-10T14:30:00` (the time part is dropped).
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let s = input.trim();

    // Date-times: keep only the date portion
    let date_part = match s.char_indices().nth(10) {
        Some((idx, 'T')) | Some((idx, ' ')) => &s[..idx],
        _ => s,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .map_err(|_| {
            ExpenseError::Parse(format!("Invalid date: '{}'. Use YYYY-MM-DD", input.trim()))
        })
}

/// Parse an amount from user input
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input)
        .map_err(|e| ExpenseError::Parse(format!("Invalid amount '{}': {}", input.trim(), e)))
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: ExpenseId,

    /// Free-text description, may be empty
    pub description: String,

    /// Amount spent (no sign restriction)
    pub amount: Money,

    /// Category label
    pub category: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense; the category is normalized
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: normalize_category(category),
            date,
        }
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {:<12} | {:<20} | {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Field overrides applied to an existing expense
///
/// `None` leaves the field as it is. Blank strings are also treated as
/// "keep current", so description and category can never be cleared
/// through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Override the amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Override the date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// True when applying the patch cannot change anything
    pub fn is_empty(&self) -> bool {
        non_blank(&self.description).is_none()
            && non_blank(&self.category).is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }

    /// Apply the overrides to `expense`, returning whether anything changed
    pub fn apply(&self, expense: &mut Expense) -> bool {
        let before = expense.clone();

        if let Some(description) = non_blank(&self.description) {
            expense.description = description.to_string();
        }
        if let Some(category) = non_blank(&self.category) {
            expense.category = category.trim().to_string();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }

        *expense != before
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
