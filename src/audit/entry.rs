//! Audit entry data structures
//!
//! One line of the audit log: what happened to which expense, with the
//! record as it was before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::{Expense, ExpenseId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the affected expense
    pub expense_id: ExpenseId,

    /// Description at the time of the operation, for readable history
    pub description: String,

    /// The expense before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// The expense after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    /// Changed fields of an update, e.g. `amount: 3.5 -> 4.0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: subject.id.clone(),
            description: subject.description.clone(),
            before: None,
            after: None,
            changes: None,
        }
    }

    /// Entry for a newly stored expense
    pub fn created(expense: &Expense) -> Self {
        Self {
            after: Some(expense.clone()),
            ..Self::new(Operation::Create, expense)
        }
    }

    /// Entry for a replaced expense, with a summary of changed fields
    pub fn updated(before: &Expense, after: &Expense) -> Self {
        let changes = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        Self {
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes,
            ..Self::new(Operation::Update, after)
        }
    }

    /// Entry for a removed expense
    pub fn deleted(expense: &Expense) -> Self {
        Self {
            before: Some(expense.clone()),
            ..Self::new(Operation::Delete, expense)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id,
            self.description
        );

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}
