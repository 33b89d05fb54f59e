//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::config::Settings;
use crate::models::{Category, Expense, PaymentMethod};
use crate::services::ExpenseView;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Payment")]
    payment: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: settings.format_date(expense.date),
            description: expense.description.clone(),
            category: expense.category.name(),
            payment: expense.payment_method.name(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(5), Alignment::right());
    table.to_string()
}

/// One-line summary printed under `list`
pub fn format_view_summary(view: &ExpenseView<'_>, settings: &Settings) -> String {
    let mut summary = format!(
        "Showing {} of {} matching",
        view.rows.len(),
        view.matching
    );
    if view.matching != view.total {
        summary.push_str(&format!(" ({} total)", view.total));
    }
    summary.push_str(&format!(
        ". Total: {}",
        view.displayed_total()
            .format_with_symbol(&settings.currency_symbol)
    ));
    if view.is_truncated() {
        summary.push_str(". Use --all to show every row.");
    }
    summary
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", settings.format_date(expense.date)));
    output.push_str(&format!("Payment:     {}\n", expense.payment_method));

    output
}

/// List the fixed category and payment method vocabularies
pub fn format_vocabularies() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::ALL {
        output.push_str(&format!("  {}\n", category));
    }
    output.push_str("\nPayment methods:\n");
    for method in PaymentMethod::ALL {
        output.push_str(&format!("  {}\n", method));
    }
    output
}
