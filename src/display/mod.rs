//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses for the command line.

pub mod expense;

pub use expense::{
    format_expense_details, format_expense_table, format_view_summary, format_vocabularies,
};
