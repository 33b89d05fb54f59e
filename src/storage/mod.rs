//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and the append-only audit log.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, Upserted};
pub use file_io::{inspect, read_json, write_json_atomic, FileState};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) {
        self.expenses.load();
    }

    /// Record a create in the audit log
    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::created(expense))
    }

    /// Record an update in the audit log, with a field diff
    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::updated(before, after))
    }

    /// Record a delete in the audit log
    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::deleted(expense))
    }
}
