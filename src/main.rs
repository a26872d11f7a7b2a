use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_categories_command, handle_expense_command,
    handle_export_command, handle_summary_command, today, BudgetCommands, ExpenseCommands,
    ExportFormat,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::menu::run_menu;
use expense_tracker::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records expenses to a JSON file, filters and summarises them, \
                  and tracks spending against a monthly budget. Run without a \
                  command for the interactive menu."
)]
struct Cli {
    /// Ledger file (defaults to $EXPENSE_TRACKER_FILE, then ./expenses.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly totals, newest month first
    Summary,

    /// Totals and shares per category
    Categories,

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        init: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = ExpensePaths::new(cli.file)?;
    let settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Config { init }) = cli.command {
        if init {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
        }
        print_config(&paths, &settings);
        return Ok(());
    }

    let (mut storage, warning) = Storage::open(paths.data_file());
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&mut storage, &settings, today())?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Categories) => handle_categories_command(&storage, &settings)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, &settings, cmd)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, &output, format)?
        }
        Some(Commands::Config { .. }) => {}
    }

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data file:        {}", paths.data_file().display());
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!(
        "  Expensive threshold: {}",
        settings
            .expensive_threshold
            .format_with_symbol(&settings.currency_symbol)
    );
    println!("  Budget warning at:   {}%", settings.budget_warning_percent);
    match settings.default_list_limit {
        Some(limit) => println!("  Default list limit:  {}", limit),
        None => println!("  Default list limit:  none"),
    }
}
