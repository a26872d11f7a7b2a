//! Category Report
//!
//! Spending per category with each category's share of the total.

use rust_decimal::Decimal;
use std::io::Write;

use crate::display::truncate;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::query::{budget_percent, group_by_category, sum};

/// Spending in a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of the overall total, 0 when the overall total is not positive
    /// or the share is out of range
    pub percentage: Decimal,
}

/// Spending broken down by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Largest total first
    pub categories: Vec<CategorySpending>,
    pub total: Money,
}

impl CategoryReport {
    /// Build the report over `records`
    pub fn generate(records: &[Expense]) -> Self {
        let total = sum(records);

        let mut categories: Vec<CategorySpending> = group_by_category(records)
            .into_iter()
            .map(|(category, expenses)| {
                let cat_total = sum(&expenses);
                let percentage = budget_percent(cat_total, total)
                    .map(|p| p.round_dp(1))
                    .unwrap_or(Decimal::ZERO);
                CategorySpending {
                    category,
                    total: cat_total,
                    count: expenses.len(),
                    percentage,
                }
            })
            .collect();

        // Largest first; the BTreeMap already ordered names for ties
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self { categories, total }
    }

    /// Format the report for terminal output
    pub fn format_terminal<W: Write>(&self, writer: &mut W, currency: &str) -> ExpenseResult<()> {
        let io = |e: std::io::Error| ExpenseError::Io(e.to_string());

        writeln!(
            writer,
            "{:<20} {:>6} {:>14} {:>7}",
            "Category", "Count", "Total", "Share"
        )
        .map_err(io)?;
        writeln!(writer, "{}", "-".repeat(50)).map_err(io)?;

        for cat in &self.categories {
            writeln!(
                writer,
                "{:<20} {:>6} {:>14} {:>7}",
                truncate(&cat.category, 20),
                cat.count,
                cat.total.format_with_symbol(currency),
                format!("{:.1}%", cat.percentage)
            )
            .map_err(io)?;
        }

        writeln!(writer, "{}", "-".repeat(50)).map_err(io)?;
        writeln!(
            writer,
            "{:<20} {:>6} {:>14}",
            "TOTAL",
            self.categories.iter().map(|c| c.count).sum::<usize>(),
            self.total.format_with_symbol(currency)
        )
        .map_err(io)?;

        Ok(())
    }
}
