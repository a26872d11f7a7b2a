//! Interactive menu
//!
//! The numbered menu shown when `expense` runs without a command. Every
//! change stays in memory until Save & Exit writes the ledger once.

pub mod prompt;

pub use prompt::Prompter;

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use crossterm::style::Color;
use tracing::debug;

use crate::config::Settings;
use crate::display::report::paint;
use crate::display::{format_budget_status, format_expense_register, RegisterStyle};
use crate::error::ExpenseResult;
use crate::models::{parse_amount, parse_date, ExpenseId, ExpensePatch};
use crate::query::{
    filter_by_category, filter_by_date_range, filter_by_keyword, filter_by_min_amount,
    sort_by_date_desc,
};
use crate::reports::{BudgetStatus, MonthlySummary};
use crate::storage::Storage;

/// What the user picked on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Filter,
    Update,
    Delete,
    Summary,
    SetBudget,
    SaveAndExit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::Filter),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Summary),
            "6" => Some(Self::SetBudget),
            "7" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// Run the menu on the process's stdin and stdout
pub fn run_menu(storage: &mut Storage, settings: &Settings, today: NaiveDate) -> ExpenseResult<()> {
    let colored = crate::cli::use_color();
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), settings, today, colored);
    menu.run(storage)
}

/// Interactive session over a reader and writer
pub struct Menu<'a, R, W> {
    prompter: Prompter<R, W>,
    settings: &'a Settings,
    today: NaiveDate,
    colored: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, output: W, settings: &'a Settings, today: NaiveDate, colored: bool) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            settings,
            today,
            colored,
        }
    }

    /// Loop until Save & Exit or end of input, then save
    pub fn run(&mut self, storage: &mut Storage) -> ExpenseResult<()> {
        loop {
            self.draw_header(storage)?;

            let Some(answer) = self.prompter.prompt("\nSelect an option (1-7): ")? else {
                // End of input behaves like Save & Exit
                writeln!(self.prompter.output())?;
                return self.save_and_exit(storage);
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => self.add_expense(storage)?,
                Some(MenuChoice::Filter) => self.filter_expenses(storage)?,
                Some(MenuChoice::Update) => self.update_expense(storage)?,
                Some(MenuChoice::Delete) => self.delete_expense(storage)?,
                Some(MenuChoice::Summary) => self.monthly_summary(storage)?,
                Some(MenuChoice::SetBudget) => self.set_budget(storage)?,
                Some(MenuChoice::SaveAndExit) => return self.save_and_exit(storage),
                None => {
                    writeln!(self.prompter.output(), "Invalid choice.")?;
                    self.prompter.pause()?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn currency(&self) -> &'a str {
        self.settings.currency_symbol.as_str()
    }

    fn draw_header(&mut self, storage: &Storage) -> ExpenseResult<()> {
        if self.colored {
            self.prompter.clear()?;
        }

        let status = BudgetStatus::generate(
            storage.ledger(),
            self.today,
            self.settings.budget_warning_percent,
        );
        let banner = status.map(|s| format_budget_status(&s, self.currency(), self.colored));

        let out = self.prompter.output();
        writeln!(out, "==============================================")?;
        writeln!(out, "               EXPENSE TRACKER                ")?;
        writeln!(out, "==============================================")?;
        if let Some(banner) = banner {
            writeln!(out, "{}", banner)?;
        }

        writeln!(out)?;
        writeln!(out, "1. Add New Expense")?;
        writeln!(out, "2. List & Filter")?;
        writeln!(out, "3. Update Expense")?;
        writeln!(out, "4. Delete Expense")?;
        writeln!(out, "5. Monthly Summary")?;
        writeln!(out, "6. Set Monthly Budget")?;
        writeln!(out, "7. Save & Exit")?;

        Ok(())
    }

    fn add_expense(&mut self, storage: &mut Storage) -> ExpenseResult<()> {
        writeln!(self.prompter.output(), "\n--- Add New Expense ---")?;

        let Some(description) = self.prompter.prompt("Description: ")? else {
            return Ok(());
        };
        let Some(category) = self
            .prompter
            .prompt("Category (e.g., Food, Transport, Utilities): ")?
        else {
            return Ok(());
        };
        let Some(amount) = self.prompter.prompt("Amount: ")? else {
            return Ok(());
        };

        let amount = match parse_amount(&amount) {
            Ok(amount) => amount,
            Err(err) => {
                debug!(error = %err, "add skipped");
                writeln!(self.prompter.output(), "Invalid amount. Expense not added.")?;
                return self.prompter.pause();
            }
        };

        let date_input = self
            .prompter
            .prompt("Date (YYYY-MM-DD) [Leave blank for today]: ")?
            .unwrap_or_default();
        let date = if date_input.is_empty() {
            self.today
        } else {
            parse_date(&date_input).unwrap_or(self.today)
        };

        let expense = match storage.ledger_mut().add(&description, &category, amount, date) {
            Ok(expense) => expense,
            Err(err) => {
                writeln!(self.prompter.output(), "{}. Expense not added.", err)?;
                return self.prompter.pause();
            }
        };

        let message = format!("Expense recorded successfully! (ID: {})", expense.id);
        let colored = self.colored;
        writeln!(self.prompter.output(), "{}", paint(&message, Color::Green, colored))?;
        self.prompter.pause()
    }

    fn filter_expenses(&mut self, storage: &Storage) -> ExpenseResult<()> {
        {
            let out = self.prompter.output();
            writeln!(out, "\n--- Filter Options ---")?;
            writeln!(out, "1. Show All")?;
            writeln!(out, "2. By Category")?;
            writeln!(out, "3. By Date Range")?;
            writeln!(out, "4. By Minimum Amount")?;
            writeln!(out, "5. Search Description")?;
        }

        let records = storage.ledger().records();
        let choice = self.prompter.prompt("Choice: ")?.unwrap_or_default();

        let results = match choice.as_str() {
            "2" => {
                let available = storage.ledger().categories().join(", ");
                writeln!(self.prompter.output(), "Available: {}", available)?;
                let category = self.prompter.prompt("Enter Category: ")?.unwrap_or_default();
                filter_by_category(records, &category)
            }
            "3" => {
                let start = self.prompter.prompt("Start Date (YYYY-MM-DD): ")?.unwrap_or_default();
                let end = self.prompter.prompt("End Date (YYYY-MM-DD): ")?.unwrap_or_default();
                match (parse_date(&start), parse_date(&end)) {
                    (Ok(start), Ok(end)) => filter_by_date_range(records, start, end),
                    _ => {
                        writeln!(self.prompter.output(), "Invalid date.")?;
                        return self.prompter.pause();
                    }
                }
            }
            "4" => {
                let min = self.prompter.prompt("Min Amount: ")?.unwrap_or_default();
                match parse_amount(&min) {
                    Ok(min) => filter_by_min_amount(records, min),
                    Err(_) => {
                        writeln!(self.prompter.output(), "Invalid amount.")?;
                        return self.prompter.pause();
                    }
                }
            }
            "5" => {
                let keyword = self.prompter.prompt("Search keyword: ")?.unwrap_or_default();
                filter_by_keyword(records, &keyword)
            }
            _ => records.to_vec(),
        };

        if self.colored {
            self.prompter.clear()?;
        }

        let style = RegisterStyle {
            currency: self.currency(),
            highlight_over: self.settings.expensive_threshold,
            colored: self.colored,
        };
        let table = format_expense_register(&sort_by_date_desc(&results), &style);
        write!(self.prompter.output(), "{}", table)?;
        self.prompter.pause()
    }

    fn prompt_id(&mut self, label: &str) -> ExpenseResult<Option<ExpenseId>> {
        let answer = self.prompter.prompt(label)?.unwrap_or_default();
        Ok(answer.parse().ok())
    }

    fn update_expense(&mut self, storage: &mut Storage) -> ExpenseResult<()> {
        let Some(id) = self.prompt_id("\nEnter Expense ID to Update: ")? else {
            return Ok(());
        };

        let Some(current) = storage.ledger().find(id).cloned() else {
            writeln!(self.prompter.output(), "Not found.")?;
            return self.prompter.pause();
        };

        writeln!(
            self.prompter.output(),
            "Leaving a field blank will keep current value."
        )?;

        let description = self
            .prompter
            .prompt(&format!("Description [{}]: ", current.description))?
            .unwrap_or_default();
        let category = self
            .prompter
            .prompt(&format!("Category [{}]: ", current.category))?
            .unwrap_or_default();
        let amount = self
            .prompter
            .prompt(&format!("Amount [{}]: ", current.amount.amount()))?
            .unwrap_or_default();
        let date = self
            .prompter
            .prompt(&format!("Date [{}]: ", current.date.format("%Y-%m-%d")))?
            .unwrap_or_default();

        let mut patch = ExpensePatch::new().description(description).category(category);
        if let Ok(amount) = parse_amount(&amount) {
            patch = patch.amount(amount);
        }
        if let Ok(date) = parse_date(&date) {
            patch = patch.date(date);
        }

        storage.ledger_mut().update(id, &patch)?;
        writeln!(self.prompter.output(), "Expense updated!")?;
        self.prompter.pause()
    }

    fn delete_expense(&mut self, storage: &mut Storage) -> ExpenseResult<()> {
        if let Some(id) = self.prompt_id("\nEnter Expense ID to Delete: ")? {
            let message = if storage.ledger_mut().delete(id) {
                "Deleted."
            } else {
                "ID not found."
            };
            writeln!(self.prompter.output(), "{}", message)?;
        }
        self.prompter.pause()
    }

    fn monthly_summary(&mut self, storage: &Storage) -> ExpenseResult<()> {
        let summary = MonthlySummary::generate(storage.ledger().records());
        let currency = self.currency();

        writeln!(self.prompter.output())?;
        summary.format_terminal(self.prompter.output(), currency)?;
        self.prompter.pause()
    }

    fn set_budget(&mut self, storage: &mut Storage) -> ExpenseResult<()> {
        let answer = self
            .prompter
            .prompt("\nEnter Monthly Spending Limit: ")?
            .unwrap_or_default();

        if let Ok(budget) = parse_amount(&answer) {
            storage.ledger_mut().set_budget(budget);
            writeln!(self.prompter.output(), "Budget Saved.")?;
        }
        self.prompter.pause()
    }

    fn save_and_exit(&mut self, storage: &Storage) -> ExpenseResult<()> {
        match storage.save() {
            Ok(()) => writeln!(self.prompter.output(), "Data saved successfully.")?,
            Err(err) => writeln!(self.prompter.output(), "Save error: {}", err)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage;
    use rust_decimal_macros::dec;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn run(storage: &mut Storage, script: &str) -> String {
        let settings = Settings::default();
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new(), &settings, today(), false);
        menu.run(storage).unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    fn open(dir: &TempDir) -> Storage {
        Storage::open(dir.path().join("expenses.json")).0
    }

    #[test]
    fn test_add_then_save() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);

        let out = run(&mut storage, "1\nLunch\nFood\n12.50\n2024-01-10\n\n7\n");
        assert!(out.contains("Expense recorded successfully! (ID: 1)"));
        assert!(out.contains("Data saved successfully."));

        let reloaded = storage::load(dir.path().join("expenses.json")).ledger;
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.records()[0].amount, Money::new(dec!(12.50)));
        assert_eq!(reloaded.records()[0].category, "Food");
    }

    #[test]
    fn test_invalid_amount_skips_add() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);

        let out = run(&mut storage, "1\nLunch\nFood\nabc\n\n7\n");
        assert!(out.contains("Invalid amount. Expense not added."));
        assert!(storage.ledger().is_empty());
    }

    #[test]
    fn test_blank_date_uses_today() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);

        run(&mut storage, "1\nBus\n\n2.75\n\n\n7\n");
        let expense = &storage.ledger().records()[0];
        assert_eq!(expense.date, today());
        assert_eq!(expense.category, "General");
    }

    #[test]
    fn test_update_blank_keeps_fields() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage
            .ledger_mut()
            .add("Coffee", "Food", Money::from_whole(3), today())
            .unwrap();

        run(&mut storage, "3\n1\n\nDrinks\n\n\n\n7\n");
        let expense = &storage.ledger().records()[0];
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category, "Drinks");
        assert_eq!(expense.amount, Money::from_whole(3));
    }

    #[test]
    fn test_delete_missing_id() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);

        let out = run(&mut storage, "4\n9\n\n7\n");
        assert!(out.contains("ID not found."));
    }

    #[test]
    fn test_filter_by_category() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.ledger_mut().add("Lunch", "Food", Money::from_whole(12), today()).unwrap();
        storage.ledger_mut().add("Bus", "Transport", Money::from_whole(2), today()).unwrap();

        let out = run(&mut storage, "2\n2\nfood\n\n7\n");
        assert!(out.contains("Available: Food, Transport"));
        assert!(out.contains("Lunch"));
        assert!(!out.contains("| Bus"));
    }

    #[test]
    fn test_budget_banner() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.ledger_mut().add("Rent", "Home", Money::from_whole(200), today()).unwrap();

        let out = run(&mut storage, "6\n100\n\n7\n");
        assert!(out.contains("Budget Saved."));
        assert!(out.contains("Monthly Budget: $100.00 | Spent: $200.00 (200.0%)"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);
        storage.ledger_mut().set_budget(Money::from_whole(50));

        let out = run(&mut storage, "");
        assert!(out.contains("Data saved successfully."));
        assert!(dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_save_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let mut storage = Storage::open(blocker.join("expenses.json")).0;

        let out = run(&mut storage, "7\n");
        assert!(out.contains("Save error:"));
    }

    #[test]
    fn test_invalid_choice() {
        let dir = TempDir::new().unwrap();
        let mut storage = open(&dir);

        let out = run(&mut storage, "9\n\n7\n");
        assert!(out.contains("Invalid choice."));
    }
}
