//! User settings for the expense tracker
//!
//! Manages user preferences such as the table page size, the initial
//! show-all state, and display formatting.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rows shown in the expense table when show-all is off
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether the table starts with every row visible
    #[serde(default = "default_show_all")]
    pub show_all: bool,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_size() -> usize {
    5
}

fn default_show_all() -> bool {
    true
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            page_size: default_page_size(),
            show_all: default_show_all(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, falling back to defaults when the file can't be used.
    ///
    /// Runs before logging is set up, so the problem goes to stderr. The
    /// broken file is left on disk for the user to fix.
    pub fn load_or_default(paths: &ExpensePaths) -> Self {
        match Self::load_or_create(paths) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!(
                    "Warning: {} ({}); using default settings",
                    e,
                    paths.settings_file().display()
                );
                Settings::default()
            }
        }
    }

    /// Page size clamped to at least one row
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Format a date with the configured format, falling back to ISO
    /// when the configured pattern is not valid strftime
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}
