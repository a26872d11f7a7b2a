//! Filtering and ordering of expenses
//!
//! Every function takes a slice and returns a new vector; the input is never
//! modified. `ExpenseFilter` composes them for the list view.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Expense, Money};

/// Expenses whose category matches `category`, ignoring case
pub fn filter_by_category(records: &[Expense], category: &str) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.in_category(category))
        .cloned()
        .collect()
}

/// Expenses whose description contains `keyword`, ignoring case
pub fn filter_by_keyword(records: &[Expense], keyword: &str) -> Vec<Expense> {
    let needle = keyword.to_lowercase();
    records
        .iter()
        .filter(|e| e.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Expenses with `amount >= min`
pub fn filter_by_min_amount(records: &[Expense], min: Money) -> Vec<Expense> {
    records.iter().filter(|e| e.amount >= min).cloned().collect()
}

/// Expenses dated between `start` and `end`, both inclusive
pub fn filter_by_date_range(records: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// Expenses with `amount > threshold`
pub fn filter_expensive(records: &[Expense], threshold: Money) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.amount > threshold)
        .cloned()
        .collect()
}

/// Most recent first; equal dates keep their original order
pub fn sort_by_date_desc(records: &[Expense]) -> Vec<Expense> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The `n` largest expenses, largest first; ties keep their original order
pub fn top_n_by_amount(records: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(n);
    sorted
}

/// Options for filtering the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by category (case-insensitive exact match)
    pub category: Option<String>,
    /// Filter by description keyword
    pub keyword: Option<String>,
    /// Minimum amount (inclusive)
    pub min_amount: Option<Money>,
    /// Date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Only amounts strictly above this
    pub expensive_over: Option<Money>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by description keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Filter by minimum amount
    pub fn min_amount(mut self, min: Money) -> Self {
        self.min_amount = Some(min);
        self
    }

    /// Only expenses on or after `start`
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only expenses on or before `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Only expenses above `threshold`
    pub fn expensive_over(mut self, threshold: Money) -> Self {
        self.expensive_over = Some(threshold);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply every set criterion, newest first
    pub fn apply(&self, records: &[Expense]) -> Vec<Expense> {
        let mut matched = records.to_vec();

        if let Some(category) = &self.category {
            matched = filter_by_category(&matched, category);
        }
        if let Some(keyword) = &self.keyword {
            matched = filter_by_keyword(&matched, keyword);
        }
        if let Some(min) = self.min_amount {
            matched = filter_by_min_amount(&matched, min);
        }
        if let Some(start) = self.start_date {
            matched.retain(|e| e.date >= start);
        }
        if let Some(end) = self.end_date {
            matched.retain(|e| e.date <= end);
        }
        if let Some(threshold) = self.expensive_over {
            matched = filter_expensive(&matched, threshold);
        }

        let mut sorted = sort_by_date_desc(&matched);
        if let Some(limit) = self.limit {
            sorted.truncate(limit);
        }

        debug!(input = records.len(), matched = sorted.len(), "filter applied");
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: u32, desc: &str, amount: Money, category: &str, on: NaiveDate) -> Expense {
        Expense::new(ExpenseId::new(id), desc, amount, category, on)
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "Groceries at market", Money::new(dec!(50)), "Food", date(2024, 1, 10)),
            expense(2, "Train pass", Money::new(dec!(150)), "Transport", date(2024, 1, 15)),
            expense(3, "Pizza night", Money::new(dec!(100)), "food", date(2024, 2, 1)),
            expense(4, "Refund", Money::new(dec!(-20)), "General", date(2024, 1, 15)),
        ]
    }

    fn ids(records: &[Expense]) -> Vec<u32> {
        records.iter().map(|e| e.id.value()).collect()
    }

    #[test]
    fn test_filter_by_category_ignores_case() {
        assert_eq!(ids(&filter_by_category(&sample(), "FOOD")), vec![1, 3]);
        assert!(filter_by_category(&sample(), "Rent").is_empty());
    }

    #[test]
    fn test_filter_by_keyword() {
        assert_eq!(ids(&filter_by_keyword(&sample(), "PASS")), vec![2]);
        assert_eq!(ids(&filter_by_keyword(&sample(), "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_by_min_amount_inclusive() {
        assert_eq!(
            ids(&filter_by_min_amount(&sample(), Money::from_whole(100))),
            vec![2, 3]
        );
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        let found = filter_by_date_range(&sample(), date(2024, 1, 10), date(2024, 1, 15));
        assert_eq!(ids(&found), vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_expensive_is_strict() {
        assert_eq!(ids(&filter_expensive(&sample(), Money::from_whole(100))), vec![2]);
    }

    #[test]
    fn test_sort_by_date_desc_is_stable() {
        assert_eq!(ids(&sort_by_date_desc(&sample())), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_top_n_by_amount() {
        assert_eq!(ids(&top_n_by_amount(&sample(), 2)), vec![2, 3]);
        assert_eq!(top_n_by_amount(&sample(), 10).len(), 4);
        assert!(top_n_by_amount(&sample(), 0).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_order() {
        let records = vec![
            expense(1, "a", Money::from_whole(5), "x", date(2024, 1, 1)),
            expense(2, "b", Money::from_whole(9), "x", date(2024, 1, 1)),
            expense(3, "c", Money::from_whole(5), "x", date(2024, 1, 1)),
        ];
        assert_eq!(ids(&top_n_by_amount(&records, 3)), vec![2, 1, 3]);
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let records = sample();
        let _ = sort_by_date_desc(&records);
        let _ = top_n_by_amount(&records, 1);
        assert_eq!(records, sample());
    }

    #[test]
    fn test_expense_filter_composes() {
        let filter = ExpenseFilter::new()
            .category("food")
            .since(date(2024, 1, 1))
            .until(date(2024, 12, 31))
            .min_amount(Money::from_whole(60));
        assert_eq!(ids(&filter.apply(&sample())), vec![3]);
    }

    #[test]
    fn test_expense_filter_open_ended_dates() {
        let after = ExpenseFilter::new().since(date(2024, 1, 15)).apply(&sample());
        assert_eq!(ids(&after), vec![3, 2, 4]);

        let before = ExpenseFilter::new().until(date(2024, 1, 15)).apply(&sample());
        assert_eq!(ids(&before), vec![2, 4, 1]);
    }

    #[test]
    fn test_expense_filter_empty_sorts_and_limits() {
        let all = ExpenseFilter::new().apply(&sample());
        assert_eq!(ids(&all), vec![3, 2, 4, 1]);

        let limited = ExpenseFilter::new().limit(2).apply(&sample());
        assert_eq!(ids(&limited), vec![3, 2]);
    }
}
