//! Expense display formatting
//!
//! Provides the register table used by the list views and a detail view for
//! a single expense.

use crossterm::style::Color;

use super::report::{paint, truncate};
use crate::models::{Expense, Money};
use crate::query::sum;

const REGISTER_WIDTH: usize = 75;

/// Options controlling how the register is drawn
#[derive(Debug, Clone)]
pub struct RegisterStyle<'a> {
    /// Currency symbol for amounts
    pub currency: &'a str,
    /// Rows above this amount are highlighted
    pub highlight_over: Money,
    /// Emit terminal colors
    pub colored: bool,
}

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:<5} | {} | {:<12} | {:<25} | {:>10}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 12),
        truncate(&expense.description, 25),
        expense.amount.format_with_symbol(currency)
    )
}

/// Format a list of expenses as a register with a TOTAL footer
pub fn format_expense_register(expenses: &[Expense], style: &RegisterStyle<'_>) -> String {
    let mut output = String::new();

    let header = format!(
        "{:<5} | {:<10} | {:<12} | {:<25} | {:>10}",
        "ID", "Date", "Category", "Description", "Amount"
    );
    output.push_str(&paint(&header, Color::Yellow, style.colored));
    output.push('\n');
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    if expenses.is_empty() {
        output.push_str("   No expenses found.\n");
        return output;
    }

    for expense in expenses {
        let row = format_expense_row(expense, style.currency);
        if expense.amount > style.highlight_over {
            output.push_str(&paint(&row, Color::Red, style.colored));
        } else {
            output.push_str(&row);
        }
        output.push('\n');
    }

    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');
    let footer = format!(
        "{:>62} | {:>10}",
        "TOTAL",
        sum(expenses).format_with_symbol(style.currency)
    );
    output.push_str(&paint(&footer, Color::Cyan, style.colored));
    output.push('\n');

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if expense.description.is_empty() {
        output.push_str("Description: (none)\n");
    } else {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn plain() -> RegisterStyle<'static> {
        RegisterStyle {
            currency: "$",
            highlight_over: Money::from_whole(100),
            colored: false,
        }
    }

    fn expense(id: u32, desc: &str, amount: Money) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Expense::new(ExpenseId::new(id), desc, amount, "Entertainment & Leisure", date)
    }

    #[test]
    fn test_row_truncates() {
        let row = format_expense_row(
            &expense(3, "A very long description that will not fit", Money::new(dec!(9.5))),
            "$",
        );
        assert!(row.starts_with("3     | 2024-01-10 | Entertain... | A very long descriptio... |"));
        assert!(row.ends_with("$9.50"));
    }

    #[test]
    fn test_empty_register() {
        let text = format_expense_register(&[], &plain());
        assert!(text.contains("No expenses found."));
        assert!(!text.contains("TOTAL"));
    }

    #[test]
    fn test_register_total() {
        let expenses = vec![
            expense(1, "a", Money::new(dec!(50))),
            expense(2, "b", Money::new(dec!(150))),
        ];
        let text = format_expense_register(&expenses, &plain());

        assert!(text.contains("TOTAL |    $200.00"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_details() {
        let text = format_expense_details(&expense(7, "", Money::from_whole(3)), "€");
        assert!(text.contains("Expense:     #7"));
        assert!(text.contains("Amount:      €3.00"));
        assert!(text.contains("Description: (none)"));
    }
}
