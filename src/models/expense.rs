//! Expense model
//!
//! One recorded expense. Field names on disk are camelCase
//! (`paymentMethod`), matching existing data files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::payment::PaymentMethod;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category from the fixed vocabulary
    pub category: Category,

    /// Date of the expense
    pub date: NaiveDate,

    /// Payment method. Records written before this field existed load as
    /// the first method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            date,
            payment_method,
        }
    }

    /// Check the model invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }

    /// Case-insensitive substring match over description, category and
    /// payment method. `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.description.to_lowercase().contains(needle)
            || self.category.name().to_lowercase().contains(needle)
            || self.payment_method.name().to_lowercase().contains(needle)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}, {})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category,
            self.payment_method
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
