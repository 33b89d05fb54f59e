//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file holds a
//! bare JSON array; order on disk is insertion order.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId, IdGenerator};

use super::file_io::{read_json, write_json_atomic};

/// What `upsert` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    /// A new entry was appended
    Inserted,
    /// An entry with the same id was replaced; holds the previous value
    Replaced(Expense),
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
    ids: IdGenerator,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable data file is copied before it can be overwritten
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Load expenses from disk, replacing in-memory state.
    ///
    /// A missing file loads as empty. So does an unreadable or malformed
    /// one: the problem is logged and never reaches the user, and the file
    /// is copied to [`backup_path`](Self::backup_path) since the next save
    /// replaces it.
    pub fn load(&mut self) {
        self.expenses = match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(Some(expenses)) => expenses,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "expense data unreadable, starting empty");
                self.back_up_unreadable();
                Vec::new()
            }
        };
        self.ids = IdGenerator::seeded(self.expenses.iter().map(|e| &e.id));
        tracing::debug!(count = self.expenses.len(), path = %self.path.display(), "loaded expenses");
    }

    fn back_up_unreadable(&self) {
        let backup = self.backup_path();
        match std::fs::copy(&self.path, &backup) {
            Ok(_) => tracing::warn!(backup = %backup.display(), "copied unreadable expense data"),
            Err(e) => tracing::error!(error = %e, "failed to back up unreadable expense data"),
        }
    }

    /// Save the full current sequence to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, self.expenses.as_slice())?;
        tracing::debug!(count = self.expenses.len(), "saved expenses");
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    /// Generate an id no stored expense uses
    pub fn next_id(&mut self) -> ExpenseId {
        self.ids.next_id()
    }

    /// Replace the entry with the same id in place, or append it
    pub fn upsert(&mut self, expense: Expense) -> Upserted {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => Upserted::Replaced(std::mem::replace(existing, expense)),
            None => {
                self.ids.observe(&expense.id);
                self.expenses.push(expense);
                Upserted::Inserted
            }
        }
    }

    /// Position of the entry with this id in insertion order
    pub fn position(&self, id: &ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| &e.id == id)
    }

    /// Delete the entry with this id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ExpenseId) -> Option<Expense> {
        let index = self.position(id)?;
        Some(self.expenses.remove(index))
    }

    /// Put a removed entry back where it was
    pub fn insert_at(&mut self, index: usize, expense: Expense) {
        let index = index.min(self.expenses.len());
        self.ids.observe(&expense.id);
        self.expenses.insert(index, expense);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentMethod};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(id: &str, description: &str, cents: i64) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            description,
            Money::from_cents(cents),
            Category::Other,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            PaymentMethod::Cash,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let (temp_dir, mut repo) = create_test_repo();
        fs::write(temp_dir.path().join("expenses.json"), "{\"oops\": tru").unwrap();

        repo.load();
        assert_eq!(repo.count(), 0);
        assert_eq!(fs::read_to_string(repo.backup_path()).unwrap(), "{\"oops\": tru");
    }

    #[test]
    fn test_unreadable_file_survives_next_save() {
        let (temp_dir, mut repo) = create_test_repo();
        let original = r#"[{"id": "1", "description": "Coffee", "amount": 3.5, "category": "Groceries?", "date": "2024-01-01", "paymentMethod": "Cash"}]"#;
        fs::write(temp_dir.path().join("expenses.json"), original).unwrap();

        repo.load();
        assert_eq!(repo.count(), 0);
        assert_eq!(repo.backup_path(), temp_dir.path().join("expenses.json.corrupt"));

        repo.upsert(expense("2", "Tea", 200));
        repo.save().unwrap();

        assert_eq!(fs::read_to_string(repo.backup_path()).unwrap(), original);
    }

    #[test]
    fn test_missing_file_makes_no_backup() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load();
        assert!(!repo.backup_path().exists());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let (temp_dir, mut repo) = create_test_repo();
        fs::write(temp_dir.path().join("expenses.json"), r#"{"expenses": []}"#).unwrap();

        repo.load();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_upsert_appends_then_replaces_in_place() {
        let (_temp_dir, mut repo) = create_test_repo();

        assert_eq!(repo.upsert(expense("1", "Coffee", 350)), Upserted::Inserted);
        assert_eq!(repo.upsert(expense("2", "Bus", 200)), Upserted::Inserted);

        let previous = repo.upsert(expense("1", "Coffee", 400));
        assert_eq!(previous, Upserted::Replaced(expense("1", "Coffee", 350)));

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.all()[0].amount.cents(), 400);
        assert_eq!(repo.all()[1].description, "Bus");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.load();
        repo.upsert(expense("1", "Coffee", 350));
        repo.upsert(expense("1", "Coffee", 400));
        repo.save().unwrap();

        let mut reloaded = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        reloaded.load();

        assert_eq!(reloaded.count(), 1);
        let coffee = reloaded.get(&ExpenseId::new("1")).unwrap();
        assert_eq!(coffee.amount.cents(), 400);
    }

    #[test]
    fn test_file_is_bare_array() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.upsert(expense("1", "Coffee", 350));
        repo.save().unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["paymentMethod"], "Cash");
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.upsert(expense("1", "Coffee", 350));
        repo.upsert(expense("2", "Bus", 200));

        let id = ExpenseId::new("1");
        assert!(repo.remove(&id).is_some());
        assert!(repo.remove(&id).is_none());
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.all()[0].description, "Bus");
    }

    #[test]
    fn test_insert_at_restores_position() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.upsert(expense("1", "Coffee", 350));
        repo.upsert(expense("2", "Bus", 200));
        repo.upsert(expense("3", "Lunch", 900));

        let id = ExpenseId::new("2");
        let index = repo.position(&id).unwrap();
        let removed = repo.remove(&id).unwrap();
        repo.insert_at(index, removed);

        let order: Vec<_> = repo.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_next_id_after_load_is_unused() {
        let (temp_dir, mut repo) = create_test_repo();
        let far_future = "99999999999999";
        repo.upsert(expense(far_future, "Later", 100));
        repo.save().unwrap();

        let mut reloaded = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        reloaded.load();
        let id = reloaded.next_id();
        assert_ne!(id.as_str(), far_future);
        assert!(reloaded.get(&id).is_none());
    }
}
