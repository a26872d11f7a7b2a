//! Budget Status
//!
//! How much of the monthly budget has been spent in the current month.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Ledger, Money, YearMonth};
use crate::query::{budget_percent, current_month_total};

/// How close spending is to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    /// Comfortably within budget
    Ok,
    /// Above the warning threshold but not over
    Warning,
    /// Spent more than the budget
    Over,
}

/// Current-month spending against the monthly budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    /// Month the figures are for
    pub month: YearMonth,
    /// Monthly budget
    pub budget: Money,
    /// Spent so far this month
    pub spent: Money,
    /// Budget minus spent (negative when over)
    pub remaining: Money,
    /// Spent as a percentage of budget
    pub percent: Decimal,
    /// Classification of `percent`
    pub level: BudgetLevel,
}

impl BudgetStatus {
    /// Compute the status for the month containing `today`
    ///
    /// Returns `None` when no budget is set.
    pub fn generate(ledger: &Ledger, today: NaiveDate, warning_percent: Decimal) -> Option<Self> {
        let budget = ledger.monthly_budget();
        let spent = current_month_total(ledger.records(), today);
        let percent = budget_percent(spent, budget)?;

        let level = if spent > budget {
            BudgetLevel::Over
        } else if percent > warning_percent {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Ok
        };

        Some(Self {
            month: YearMonth::from_date(today),
            budget,
            spent,
            remaining: budget - spent,
            percent,
            level,
        })
    }
}
