//! Ledger model
//!
//! The in-memory set of expenses, the id counter, and the monthly budget.
//! All mutations go through the methods here so that ids stay unique and
//! are never reused.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::expense::{Expense, ExpensePatch};
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// The complete expense ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ledger {
    /// Expenses in insertion order
    #[serde(rename = "expenses")]
    records: Vec<Expense>,

    /// Id handed to the next created expense
    next_id: ExpenseId,

    /// Monthly spending limit; zero means no budget tracking
    monthly_budget: Money,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: ExpenseId::FIRST,
            monthly_budget: Money::zero(),
        }
    }

    /// Rebuild a ledger from stored parts
    ///
    /// `next_id` is raised above the largest stored id if needed so that
    /// ids are never reused.
    pub fn from_parts(records: Vec<Expense>, next_id: ExpenseId, monthly_budget: Money) -> Self {
        let floor = records
            .iter()
            .map(|e| e.id.checked_next().unwrap_or(ExpenseId::new(u32::MAX)))
            .max()
            .unwrap_or(ExpenseId::FIRST);

        if next_id < floor {
            warn!(stored = %next_id, repaired = %floor, "next_id behind stored ids, repairing");
        }

        Self {
            records,
            next_id: next_id.max(floor),
            monthly_budget,
        }
    }

    /// All expenses in insertion order
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    /// The id the next `add` will use
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// The monthly budget (zero when unset)
    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    /// Whether budget tracking is active
    pub fn has_budget(&self) -> bool {
        self.monthly_budget.is_positive()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a new expense and return it
    ///
    /// Fails only when every id has been handed out.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        category: &str,
        amount: Money,
        date: NaiveDate,
    ) -> ExpenseResult<Expense> {
        let id = self.next_id;
        self.next_id = id
            .checked_next()
            .ok_or_else(|| ExpenseError::Validation("no expense ids left".into()))?;

        let expense = Expense::new(id, description, amount, category, date);
        debug!(id = %expense.id, category = %expense.category, amount = %expense.amount, "expense added");

        self.records.push(expense.clone());
        Ok(expense)
    }

    /// Apply a patch to the expense with `id`
    pub fn update(&mut self, id: ExpenseId, patch: &ExpensePatch) -> ExpenseResult<Expense> {
        let expense = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let changed = patch.apply(expense);
        debug!(%id, changed, "expense updated");

        Ok(expense.clone())
    }

    /// Remove every expense with `id`, returning whether any was removed
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        let before = self.records.len();
        self.records.retain(|e| e.id != id);
        let removed = self.records.len() != before;
        debug!(%id, removed, "expense delete");
        removed
    }

    /// Replace the monthly budget
    pub fn set_budget(&mut self, budget: Money) {
        debug!(budget = %budget, "monthly budget set");
        self.monthly_budget = budget;
    }

    /// Find an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Distinct category labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for expense in &self.records {
            if !seen.iter().any(|c| c == &expense.category) {
                seen.push(expense.category.clone());
            }
        }
        seen
    }
}
