//! Budget CLI commands
//!
//! Sets the monthly budget and reports current-month spending against it.

use clap::Subcommand;

use super::{today, use_color};
use crate::config::Settings;
use crate::display::format_budget_details;
use crate::error::ExpenseResult;
use crate::models::parse_amount;
use crate::reports::BudgetStatus;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget (0 turns budget tracking off)
    Set {
        /// Budget amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show this month's spending against the budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = parse_amount(&amount)?;
            storage.ledger_mut().set_budget(budget);
            storage.save()?;

            if budget.is_positive() {
                println!("Monthly budget set to {}", budget.format_with_symbol(currency));
            } else {
                println!("Budget tracking disabled.");
            }
        }

        BudgetCommands::Status => {
            match BudgetStatus::generate(
                storage.ledger(),
                today(),
                settings.budget_warning_percent,
            ) {
                Some(status) => print!("{}", format_budget_details(&status, currency, use_color())),
                None => {
                    println!("No monthly budget set.");
                    println!("Use 'expense budget set <amount>' to start tracking.");
                }
            }
        }
    }

    Ok(())
}
