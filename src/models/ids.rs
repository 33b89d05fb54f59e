//! Expense identifiers
//!
//! Ids are opaque strings on disk. Freshly generated ids are the current
//! Unix time in milliseconds, which is the shape older data files already
//! use (e.g. `"1704067200000"`).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of a timestamp-shaped id
    fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Generates timestamp ids that never repeat.
///
/// Each id is strictly greater than every numeric id the generator has
/// seen or issued, so two expenses created within the same millisecond
/// still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Create a generator seeded from ids already in use
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a ExpenseId>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(ExpenseId::as_millis)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Generate an id for the current time
    pub fn next_id(&mut self) -> ExpenseId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Generate an id for the given Unix time in milliseconds
    pub fn next_at(&mut self, now_millis: i64) -> ExpenseId {
        let value = now_millis.max(self.last.saturating_add(1));
        self.last = value;
        ExpenseId(value.to_string())
    }

    /// Account for an id inserted from outside the generator
    pub fn observe(&mut self, id: &ExpenseId) {
        if let Some(value) = id.as_millis() {
            self.last = self.last.max(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ExpenseId::new("1704067200000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1704067200000\"");

        let parsed: ExpenseId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed.as_str(), "abc");
    }

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);

        assert_eq!(a.as_str(), "1000");
        assert_eq!(b.as_str(), "1001");
        assert_eq!(c.as_str(), "1002");
    }

    #[test]
    fn test_seeded_generator_skips_existing_ids() {
        let existing = vec![
            ExpenseId::new("5000"),
            ExpenseId::new("legacy-id"),
            ExpenseId::new("4000"),
        ];
        let mut ids = IdGenerator::seeded(&existing);

        assert_eq!(ids.next_at(4500).as_str(), "5001");
    }

    #[test]
    fn test_observe_moves_generator_forward() {
        let mut ids = IdGenerator::default();
        ids.observe(&ExpenseId::new("9000"));
        assert_eq!(ids.next_at(10).as_str(), "9001");
    }
}
