//! Expense service
//!
//! Business logic for expense mutations. Every mutation is written to disk
//! immediately and recorded in the audit log. Once the data file has been
//! written the mutation stands; an audit write that fails afterwards is only
//! logged.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::{Storage, Upserted};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.storage.expenses.get(id)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.all()
    }

    /// Reserve a fresh expense id
    pub fn next_id(&mut self) -> ExpenseId {
        self.storage.expenses.next_id()
    }

    /// Insert or replace an expense, then persist.
    ///
    /// If the write fails the in-memory list is restored, so memory never
    /// runs ahead of disk.
    pub fn upsert(&mut self, expense: Expense) -> ExpenseResult<Upserted> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let id = expense.id.clone();
        let outcome = self.storage.expenses.upsert(expense);

        if let Err(e) = self.storage.expenses.save() {
            match &outcome {
                Upserted::Inserted => {
                    self.storage.expenses.remove(&id);
                }
                Upserted::Replaced(previous) => {
                    self.storage.expenses.upsert(previous.clone());
                }
            }
            return Err(e);
        }

        let Some(saved) = self.storage.expenses.get(&id) else {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        };

        let audited = match &outcome {
            Upserted::Inserted => {
                tracing::info!(id = %saved.id, "expense created");
                self.storage.log_create(saved)
            }
            Upserted::Replaced(previous) => {
                tracing::info!(id = %saved.id, "expense updated");
                self.storage.log_update(previous, saved)
            }
        };
        if let Err(e) = audited {
            tracing::warn!(id = %id, error = %e, "failed to write audit entry");
        }

        Ok(outcome)
    }

    /// Delete an expense. Unknown ids are a no-op and return `None`.
    pub fn delete(&mut self, id: &ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(index) = self.storage.expenses.position(id) else {
            tracing::debug!(id = %id, "delete of unknown expense ignored");
            return Ok(None);
        };
        let Some(removed) = self.storage.expenses.remove(id) else {
            return Ok(None);
        };

        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.insert_at(index, removed);
            return Err(e);
        }

        tracing::info!(id = %removed.id, "expense deleted");
        if let Err(e) = self.storage.log_delete(&removed) {
            tracing::warn!(id = %removed.id, error = %e, "failed to write audit entry");
        }

        Ok(Some(removed))
    }
}
