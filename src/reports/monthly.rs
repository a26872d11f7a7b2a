//! Monthly Summary
//!
//! Total spending per calendar month, newest month first.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, YearMonth};
use crate::query::{group_by_year_month, sum};

/// Totals for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub total: Money,
    pub count: usize,
}

/// Spending per month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Newest month first
    pub months: Vec<MonthlyTotal>,
    /// Total over all months
    pub grand_total: Money,
}

impl MonthlySummary {
    /// Summarize `records` by month
    pub fn generate(records: &[Expense]) -> Self {
        let months: Vec<MonthlyTotal> = group_by_year_month(records)
            .into_iter()
            .rev()
            .map(|(month, expenses)| MonthlyTotal {
                month,
                total: sum(&expenses),
                count: expenses.len(),
            })
            .collect();

        Self {
            grand_total: months.iter().map(|m| m.total).sum(),
            months,
        }
    }

    /// Format the summary for terminal output
    pub fn format_terminal<W: Write>(&self, writer: &mut W, currency: &str) -> ExpenseResult<()> {
        let io = |e: std::io::Error| ExpenseError::Io(e.to_string());

        writeln!(writer, "--- Monthly Summaries ---").map_err(io)?;
        if self.months.is_empty() {
            writeln!(writer, "   No expenses recorded.").map_err(io)?;
            return Ok(());
        }

        for month in &self.months {
            writeln!(
                writer,
                "{:<16} {:>14}  ({} expense{})",
                format!("{}:", month.month.friendly()),
                month.total.format_with_symbol(currency),
                month.count,
                if month.count == 1 { "" } else { "s" }
            )
            .map_err(io)?;
        }
        writeln!(writer, "{}", "-".repeat(44)).map_err(io)?;
        writeln!(
            writer,
            "{:<16} {:>14}",
            "Total:",
            self.grand_total.format_with_symbol(currency)
        )
        .map_err(io)?;

        Ok(())
    }
}
