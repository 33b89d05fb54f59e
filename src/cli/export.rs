//! CLI command for data export
//!
//! Writes every stored expense, in insertion order, in one of several
//! formats.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (with schema version and metadata)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments of `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let ExportArgs {
        output,
        format,
        pretty,
    } = args;

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let expenses = storage.expenses.all();
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_json(expenses, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(expenses, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    tracing::info!(count = expenses.len(), path = %output.display(), ?format, "exported expenses");
    println!("Exported {} expenses to: {}", expenses.len(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{Category, Expense, ExpenseId, Money, PaymentMethod};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.expenses.upsert(Expense::new(
            ExpenseId::new("1"),
            "Cinema",
            Money::from_cents(1500),
            Category::Entertainment,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            PaymentMethod::Debit,
        ));

        let output = temp_dir.path().join("out.yaml");
        handle_export_command(
            &storage,
            ExportArgs {
                output: output.clone(),
                format: ExportFormat::Yaml,
                pretty: false,
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.contains("description: Cinema"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let err = handle_export_command(
            &storage,
            ExportArgs {
                output: temp_dir.path().join("missing").join("out.csv"),
                format: ExportFormat::Csv,
                pretty: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
