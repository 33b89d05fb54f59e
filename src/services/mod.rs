//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validated mutations with audit records, the add/edit form controller and
//! the table view derivation.

pub mod expense;
pub mod form;
pub mod view;

pub use expense::ExpenseService;
pub use form::{ExpenseForm, FormError, FormMode, SubmitOutcome};
pub use view::{ExpenseView, SortField, SortOrder, ViewControls};
