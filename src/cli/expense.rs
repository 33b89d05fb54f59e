//! Expense CLI commands
//!
//! Implements CLI commands for expense management. Add and edit fill in an
//! `ExpenseForm` and submit it, exactly as the TUI dialog does.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::display::{
    format_expense_details, format_expense_table, format_view_summary, format_vocabularies,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseId, PaymentMethod};
use crate::services::form::today;
use crate::services::{
    ExpenseForm, ExpenseService, SortField, SortOrder, SubmitOutcome, ViewControls,
};
use crate::storage::{inspect, Storage};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "12.50" or "₹12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (defaults to Food & Dining)
        #[arg(short, long)]
        category: Option<Category>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method: credit, debit or cash (defaults to credit)
        #[arg(short, long)]
        payment: Option<PaymentMethod>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only expenses whose description, category or payment method
        /// contains this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort by date, amount or description
        #[arg(short, long, default_value = "date")]
        sort: SortField,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Show every matching expense
        #[arg(long, conflicts_with = "limit")]
        all: bool,
        /// Show at most this many expenses
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<Category>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New payment method
        #[arg(short, long)]
        payment: Option<PaymentMethod>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// List the available categories and payment methods
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
            payment,
        } => {
            let mut form = ExpenseForm::new(today());
            form.description = description;
            form.amount = amount;
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(payment) = payment {
                form.payment_method = payment;
            }

            let mut service = ExpenseService::new(storage);
            match form.submit(&mut service, today())? {
                SubmitOutcome::Created(expense) => {
                    println!("Added expense {}", expense.id);
                    print!("{}", format_expense_details(&expense, settings));
                    Ok(())
                }
                SubmitOutcome::Rejected(reason) => Err(ExpenseError::Validation(reason.to_string())),
                other => Err(ExpenseError::Storage(format!(
                    "unexpected result from create: {:?}",
                    other
                ))),
            }
        }

        ExpenseCommands::List {
            filter,
            sort,
            asc,
            all,
            limit,
        } => {
            let mut controls = ViewControls::from_settings(settings);
            controls.sort_field = sort;
            controls.sort_order = if asc {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            if let Some(filter) = filter {
                controls.set_filter(filter);
            }
            if all {
                controls.show_all = true;
            } else if let Some(limit) = limit {
                controls.show_all = false;
                controls.page_size = limit.max(1);
            }

            let view = controls.derive(storage.expenses.all());
            println!("{}", format_expense_table(&view.rows, settings));
            if view.total > 0 {
                println!("{}", format_view_summary(&view, settings));
            }
            Ok(())
        }

        ExpenseCommands::Show { id } => {
            let id = ExpenseId::new(id);
            let expense = storage
                .expenses
                .get(&id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, settings));
            Ok(())
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
            payment,
        } => {
            let id = ExpenseId::new(id);
            let existing = storage
                .expenses
                .get(&id)
                .cloned()
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            let mut form = ExpenseForm::new(today());
            form.start_edit(&existing);
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(payment) = payment {
                form.payment_method = payment;
            }

            let mut service = ExpenseService::new(storage);
            match form.submit(&mut service, today())? {
                SubmitOutcome::Updated(expense) => {
                    if expense == existing {
                        println!("No changes to expense {}", expense.id);
                    } else {
                        println!("Updated expense {}", expense.id);
                    }
                    print!("{}", format_expense_details(&expense, settings));
                    Ok(())
                }
                SubmitOutcome::Rejected(reason) => Err(ExpenseError::Validation(reason.to_string())),
                SubmitOutcome::Stale(id) => Err(ExpenseError::expense_not_found(id.to_string())),
                SubmitOutcome::Created(expense) => Err(ExpenseError::Storage(format!(
                    "edit unexpectedly created expense {}",
                    expense.id
                ))),
            }
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::new(id);
            let mut service = ExpenseService::new(storage);
            match service.delete(&id)? {
                Some(removed) => println!("Deleted expense {} ({})", removed.id, removed.description),
                None => println!("Expense {} not found, nothing to delete", id),
            }
            Ok(())
        }

        ExpenseCommands::History { limit } => {
            print_history(storage.audit(), limit)
        }

        ExpenseCommands::Categories => {
            print!("{}", format_vocabularies());
            Ok(())
        }
    }
}

fn print_history(audit: &AuditLogger, limit: usize) -> ExpenseResult<()> {
    let entries = audit.read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Print the effective configuration
pub fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    let data_file = paths.expenses_file();
    println!("Data file:      {} ({})", data_file.display(), inspect(&data_file));
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Page size:       {}", settings.page_size);
    println!("  Show all:        {}", settings.show_all);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Log level:       {}", settings.log_level);
}
