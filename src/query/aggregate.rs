//! Totals and groupings over expenses

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Expense, Money, YearMonth};

/// Total amount; zero for no expenses
pub fn sum(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Expenses grouped by the calendar month of their date
pub fn group_by_year_month(records: &[Expense]) -> BTreeMap<YearMonth, Vec<Expense>> {
    let mut groups: BTreeMap<YearMonth, Vec<Expense>> = BTreeMap::new();
    for expense in records {
        groups
            .entry(YearMonth::from_date(expense.date))
            .or_default()
            .push(expense.clone());
    }
    groups
}

/// Expenses grouped by their category label
pub fn group_by_category(records: &[Expense]) -> BTreeMap<String, Vec<Expense>> {
    let mut groups: BTreeMap<String, Vec<Expense>> = BTreeMap::new();
    for expense in records {
        groups
            .entry(expense.category.clone())
            .or_default()
            .push(expense.clone());
    }
    groups
}

/// Total of expenses dated in the same year and month as `today`
pub fn current_month_total(records: &[Expense], today: NaiveDate) -> Money {
    let month = YearMonth::from_date(today);
    records
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// `spent / budget * 100`, or `None` when there is no positive budget
pub fn budget_percent(spent: Money, budget: Money) -> Option<Decimal> {
    if !budget.is_positive() {
        return None;
    }
    spent
        .amount()
        .checked_div(budget.amount())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}
