//! Expense form controller
//!
//! Holds the raw text of the add/edit form and turns it into a validated
//! expense on submit. A form is always in one of two modes: creating a new
//! expense, or editing an existing one by id.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::error::ExpenseResult;
use crate::models::{Category, Expense, ExpenseId, Money, PaymentMethod};
use crate::services::ExpenseService;

/// Format the date field is entered in
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the form creates a new expense or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ExpenseId),
}

/// Why a submit was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Description is required")]
    MissingDescription,

    #[error("Amount is required")]
    MissingAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new expense was stored
    Created(Expense),
    /// An existing expense was replaced
    Updated(Expense),
    /// Input was invalid; nothing changed
    Rejected(FormError),
    /// The expense being edited no longer exists; nothing was stored
    Stale(ExpenseId),
}

/// Add/edit form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: Category,
    pub date: String,
    pub payment_method: PaymentMethod,
    mode: FormMode,
}

impl ExpenseForm {
    /// A blank form in create mode dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::default(),
            date: today.format(DATE_INPUT_FORMAT).to_string(),
            payment_method: PaymentMethod::default(),
            mode: FormMode::Create,
        }
    }

    /// Reset to a blank form in create mode
    pub fn start_create(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Populate the form from an existing expense and switch to edit mode
    pub fn start_edit(&mut self, expense: &Expense) {
        self.description = expense.description.clone();
        self.amount = expense.amount.to_string();
        self.category = expense.category;
        self.date = expense.date.format(DATE_INPUT_FORMAT).to_string();
        self.payment_method = expense.payment_method;
        self.mode = FormMode::Edit(expense.id.clone());
    }

    /// Abandon any edit in progress
    pub fn cancel(&mut self, today: NaiveDate) {
        self.start_create(today);
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Id of the expense being edited, if any
    pub fn editing_id(&self) -> Option<&ExpenseId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    /// Validate the field text and build an expense with the given id
    pub fn build(&self, id: ExpenseId) -> Result<Expense, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount = Money::parse(amount_text)
            .map_err(|_| FormError::InvalidAmount(amount_text.to_string()))?;
        if !amount.is_positive() {
            return Err(FormError::NonPositiveAmount);
        }

        let date_text = self.date.trim();
        let date = NaiveDate::parse_from_str(date_text, DATE_INPUT_FORMAT)
            .map_err(|_| FormError::InvalidDate(date_text.to_string()))?;

        Ok(Expense::new(
            id,
            description,
            amount,
            self.category,
            date,
            self.payment_method,
        ))
    }

    /// Submit the form through `service`.
    ///
    /// On success the expense is stored and the form resets to a blank
    /// create form dated `today`. A rejected submit leaves both the store
    /// and the form untouched.
    pub fn submit(
        &mut self,
        service: &mut ExpenseService<'_>,
        today: NaiveDate,
    ) -> ExpenseResult<SubmitOutcome> {
        let outcome = match self.mode.clone() {
            FormMode::Create => {
                let mut expense = match self.build(ExpenseId::new("")) {
                    Ok(expense) => expense,
                    Err(e) => return Ok(SubmitOutcome::Rejected(e)),
                };
                // Ids are only reserved for input that passed validation
                expense.id = service.next_id();
                service.upsert(expense.clone())?;
                SubmitOutcome::Created(expense)
            }
            FormMode::Edit(id) => {
                let expense = match self.build(id.clone()) {
                    Ok(expense) => expense,
                    Err(e) => return Ok(SubmitOutcome::Rejected(e)),
                };
                if service.get(&id).is_none() {
                    tracing::debug!(id = %id, "edited expense vanished before submit");
                    SubmitOutcome::Stale(id)
                } else {
                    service.upsert(expense.clone())?;
                    SubmitOutcome::Updated(expense)
                }
            }
        };

        self.start_create(today);
        Ok(outcome)
    }

    /// Cycle the category selector forward
    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    /// Cycle the category selector backward
    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Cycle the payment method selector forward
    pub fn next_payment_method(&mut self) {
        self.payment_method = self.payment_method.next();
    }

    /// Cycle the payment method selector backward
    pub fn prev_payment_method(&mut self) {
        self.payment_method = self.payment_method.prev();
    }
}
