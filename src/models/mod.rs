//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its identifiers, money amounts and the fixed
//! category and payment-method vocabularies.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod payment;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, IdGenerator};
pub use money::{Money, MoneyParseError};
pub use payment::PaymentMethod;
