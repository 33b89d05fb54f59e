use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, print_config, ExpenseCommands, ExportArgs,
};
use expense_tracker::config::logging::init_logging;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Track everyday spending from the terminal. Expenses are kept in a \
                  single JSON file; run without arguments to open the interactive \
                  table, or use the subcommands for scripting."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_default(&paths);
    init_logging(&paths, &settings)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all();

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
        }
    }

    Ok(())
}
