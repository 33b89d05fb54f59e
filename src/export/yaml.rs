//! YAML Export functionality
//!
//! Exports all expenses to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export all expenses to YAML, with a short comment header
pub fn export_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::new(expenses);

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)
        .map_err(|e| ExpenseError::Export(format!("Failed to write YAML export: {}", e)))?;

    Ok(())
}
