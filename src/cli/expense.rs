//! Expense CLI commands
//!
//! Implements the one-shot commands that add, list, edit and remove
//! expenses. Mutating commands save the ledger before returning.

use clap::Subcommand;

use super::{parse_id, today, use_color};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_register, RegisterStyle};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, parse_date, ExpensePatch};
use crate::query::{top_n_by_amount, ExpenseFilter};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "12.50", "$1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
        /// Category (defaults to General)
        #[arg(short, long, default_value = "")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Only this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Only descriptions containing this text
        #[arg(short, long)]
        keyword: Option<String>,
        /// Only amounts at or above this
        #[arg(long)]
        min: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Only amounts above the expensive threshold
        #[arg(long)]
        expensive: bool,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense; omitted fields are kept
    Edit {
        /// Expense ID
        id: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
    /// Show the largest expenses
    Top {
        /// How many to show
        #[arg(short, default_value = "5")]
        n: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today(),
            };

            let expense = storage
                .ledger_mut()
                .add(description.trim(), &category, amount, date)?;
            storage.save()?;

            println!("Expense added successfully! (ID: {})", expense.id);
            print!("{}", format_expense_details(&expense, currency));
        }

        ExpenseCommands::List {
            category,
            keyword,
            min,
            from,
            to,
            expensive,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();

            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(keyword) = keyword {
                filter = filter.keyword(keyword);
            }
            if let Some(min) = min {
                filter = filter.min_amount(parse_amount(&min)?);
            }
            if let Some(from) = from {
                filter = filter.since(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.until(parse_date(&to)?);
            }
            if expensive {
                filter = filter.expensive_over(settings.expensive_threshold);
            }
            if let Some(limit) = limit.or(settings.default_list_limit) {
                filter = filter.limit(limit);
            }

            let expenses = filter.apply(storage.ledger().records());
            let style = RegisterStyle {
                currency,
                highlight_over: settings.expensive_threshold,
                colored: use_color(),
            };
            print!("{}", format_expense_register(&expenses, &style));
            println!("\nShowing {} of {} expenses", expenses.len(), storage.ledger().len());
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id)?;
            let expense = storage
                .ledger()
                .find(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            print!("{}", format_expense_details(expense, currency));
        }

        ExpenseCommands::Edit {
            id,
            description,
            category,
            amount,
            date,
        } => {
            let id = parse_id(&id)?;

            let mut patch = ExpensePatch::new();
            if let Some(description) = description {
                patch = patch.description(description);
            }
            if let Some(category) = category {
                patch = patch.category(category);
            }
            if let Some(amount) = amount {
                patch = patch.amount(parse_amount(&amount)?);
            }
            if let Some(date) = date {
                patch = patch.date(parse_date(&date)?);
            }

            if patch.is_empty() {
                storage
                    .ledger()
                    .find(id)
                    .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
                println!("Nothing to change.");
                return Ok(());
            }

            let updated = storage.ledger_mut().update(id, &patch)?;
            storage.save()?;

            println!("Expense updated.");
            print!("{}", format_expense_details(&updated, currency));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if !storage.ledger_mut().delete(id) {
                return Err(ExpenseError::expense_not_found(id.to_string()));
            }
            storage.save()?;

            println!("Expense {} deleted.", id);
        }

        ExpenseCommands::Top { n } => {
            let expenses = top_n_by_amount(storage.ledger().records(), n);
            let style = RegisterStyle {
                currency,
                highlight_over: settings.expensive_threshold,
                colored: use_color(),
            };
            println!("Top {} expenses by amount", n);
            print!("{}", format_expense_register(&expenses, &style));
        }
    }

    Ok(())
}
