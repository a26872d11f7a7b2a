//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the list, summary and budget views.

use crossterm::style::{style, Color, Stylize};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::reports::{BudgetLevel, BudgetStatus};

/// Color used for each budget level
pub fn level_color(level: BudgetLevel) -> Color {
    match level {
        BudgetLevel::Ok => Color::Green,
        BudgetLevel::Warning => Color::Yellow,
        BudgetLevel::Over => Color::Red,
    }
}

/// Paint `text` when `colored` is set
pub fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: Decimal) -> String {
    format!("{:.1}%", pct.round_dp(1))
}

/// Create a simple bar chart representation, capped at full width
pub fn format_bar(percent: Decimal, width: usize) -> String {
    let pct = percent.to_f64().unwrap_or(0.0);
    if pct <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The one-line budget banner shown above the menu
///
/// `Monthly Budget: $100.00 | Spent: $85.00 (85.0%)`
pub fn format_budget_status(status: &BudgetStatus, currency: &str, colored: bool) -> String {
    let spent = format!(
        "{} ({})",
        status.spent.format_with_symbol(currency),
        format_percentage(status.percent)
    );
    format!(
        "Monthly Budget: {} | Spent: {}",
        status.budget.format_with_symbol(currency),
        paint(&spent, level_color(status.level), colored)
    )
}

/// Multi-line budget report with a usage bar
pub fn format_budget_details(status: &BudgetStatus, currency: &str, colored: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", status.month.friendly()));
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!(
        "Budget:    {:>14}\n",
        status.budget.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Spent:     {:>14}\n",
        status.spent.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Remaining: {:>14}\n",
        status.remaining.format_with_symbol(currency)
    ));

    let bar = format!(
        "[{}] {}",
        format_bar(status.percent, 30),
        format_percentage(status.percent)
    );
    output.push_str(&paint(&bar, level_color(status.level), colored));
    output.push('\n');

    match status.level {
        BudgetLevel::Over => output.push_str(&format!(
            "\nWarning: Over budget by {}\n",
            status.remaining.abs().format_with_symbol(currency)
        )),
        BudgetLevel::Warning => output.push_str("\nHeads up: approaching the monthly limit.\n"),
        BudgetLevel::Ok => {}
    }

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
