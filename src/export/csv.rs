//! CSV Export functionality
//!
//! Exports expenses to CSV, one row per expense in date order.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::query::sort_by_date_desc;

/// Export `expenses` to CSV, newest first
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in sort_by_date_desc(expenses) {
        csv.write_record([
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.description.clone(),
            format!("{:.2}", expense.amount.amount().round_dp(2)),
        ])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_export() {
        let expenses = vec![
            Expense::new(
                ExpenseId::new(1),
                "Lunch, with friends",
                Money::new(dec!(12.5)),
                "Food",
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
            Expense::new(
                ExpenseId::new(2),
                "Bus",
                Money::new(dec!(2.75)),
                "Transport",
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ),
        ];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(lines[1], "2,2024-02-01,Transport,Bus,2.75");
        assert_eq!(lines[2], "1,2024-01-10,Food,\"Lunch, with friends\",12.50");
    }

    #[test]
    fn test_csv_export_empty() {
        let mut out = Vec::new();
        export_expenses_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ID,Date,Category,Description,Amount\n");
    }
}
