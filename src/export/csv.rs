//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column headings, in order
pub const CSV_HEADER: [&str; 6] = [
    "ID",
    "Date",
    "Description",
    "Category",
    "Payment Method",
    "Amount",
];

/// Export expenses to CSV, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = expense.amount.to_string();
        csv_writer.write_record([
            expense.id.as_str(),
            date.as_str(),
            expense.description.as_str(),
            expense.category.name(),
            expense.payment_method.name(),
            amount.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}
