//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: spreadsheet-compatible expense list
//! - JSON: machine-readable export with schema version
//! - YAML: human-readable export with the same structure as JSON

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, CSV_HEADER};
pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
