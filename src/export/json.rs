//! JSON Export functionality
//!
//! Exports all expenses to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Earliest expense date, if any
    pub earliest_date: Option<String>,

    /// Latest expense date, if any
    pub latest_date: Option<String>,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Snapshot the given expenses
    pub fn new(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            earliest_date: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_date: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
            expenses: expenses.to_vec(),
        }
    }
}

/// Export all expenses to JSON
pub fn export_json<W: Write>(expenses: &[Expense], writer: W, pretty: bool) -> ExpenseResult<()> {
    let export = ExpenseExport::new(expenses);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| ExpenseError::Export(format!("Failed to write JSON export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, PaymentMethod};
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(
                ExpenseId::new("1"),
                "Coffee",
                Money::from_cents(350),
                Category::FoodAndDining,
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                PaymentMethod::Cash,
            ),
            Expense::new(
                ExpenseId::new("2"),
                "Train",
                Money::from_cents(4500),
                Category::Travel,
                NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
                PaymentMethod::Credit,
            ),
        ]
    }

    #[test]
    fn test_export_json() {
        let mut output = Vec::new();
        export_json(&sample(), &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["expense_count"], 2);
        assert_eq!(value["earliest_date"], "2023-12-30");
        assert_eq!(value["latest_date"], "2024-01-05");
        assert_eq!(value["expenses"][0]["paymentMethod"], "Cash");
        assert_eq!(value["expenses"][1]["amount"], 45.0);
    }

    #[test]
    fn test_export_round_trips_expenses() {
        let expenses = sample();
        let mut output = Vec::new();
        export_json(&expenses, &mut output, false).unwrap();

        let parsed: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.expenses, expenses);
    }

    #[test]
    fn test_empty_export() {
        let export = ExpenseExport::new(&[]);
        assert_eq!(export.expense_count, 0);
        assert!(export.earliest_date.is_none());
    }
}
