//! Table view derivation
//!
//! Turns the full expense list plus the current view controls into the rows
//! the table shows: filtered, then sorted, then cut to a page.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Attribute the table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Amount,
    Description,
}

impl SortField {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Description => "description",
        }
    }

    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Description => compare_descriptions(&a.description, &b.description),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" | "desc" => Ok(Self::Description),
            other => Err(format!(
                "unknown sort field '{}' (expected date, amount or description)",
                other
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown in the table header
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| tracing::warn!(error = %e, "collator unavailable, sorting by code point"))
            .ok();
}

/// Compare descriptions in dictionary order (root-locale collation), so
/// "Éclair" sits among the e's and "apple" precedes "Apple". Collation ties
/// fall back to the raw text so the order is total.
pub fn compare_descriptions(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

/// Expenses matching `filter`, in their original order
pub fn filter_expenses<'e>(expenses: &'e [Expense], filter: &str) -> Vec<&'e Expense> {
    let needle = filter.to_lowercase();
    expenses
        .iter()
        .filter(|e| e.matches_lowercase(&needle))
        .collect()
}

/// Stable sort; equal keys keep their relative order in either direction
pub fn sort_expenses(rows: &mut [&Expense], field: SortField, order: SortOrder) {
    match order {
        SortOrder::Ascending => rows.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Descending => rows.sort_by(|a, b| field.compare(b, a)),
    }
}

/// Current filter, sort and pagination state of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewControls {
    pub filter: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub show_all: bool,
    pub page_size: usize,
}

impl Default for ViewControls {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ViewControls {
    /// Initial controls: no filter, newest first
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            filter: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            show_all: settings.show_all,
            page_size: settings.effective_page_size(),
        }
    }

    /// Select a sort field. Choosing the active field flips the order;
    /// choosing another one starts it descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Descending;
        }
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Derive the displayed rows from the full list
    pub fn derive<'e>(&self, expenses: &'e [Expense]) -> ExpenseView<'e> {
        let mut rows = filter_expenses(expenses, &self.filter);
        sort_expenses(&mut rows, self.sort_field, self.sort_order);

        let matching = rows.len();
        if !self.show_all {
            rows.truncate(self.page_size.max(1));
        }

        ExpenseView {
            rows,
            matching,
            total: expenses.len(),
        }
    }
}

/// Rows ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseView<'e> {
    /// Displayed rows, in display order
    pub rows: Vec<&'e Expense>,
    /// Expenses that passed the filter
    pub matching: usize,
    /// Expenses in the store
    pub total: usize,
}

impl ExpenseView<'_> {
    /// Whether some matching rows are hidden by pagination
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.matching
    }

    /// Sum of the displayed amounts
    pub fn displayed_total(&self) -> Money {
        self.rows.iter().map(|e| e.amount).sum()
    }
}
