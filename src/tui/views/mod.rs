//! TUI Views module
//!
//! The expense table with its header and filter box, and the status bar.

pub mod expense_table;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    expense_table::render_header(frame, app, layout.header);
    expense_table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let detail = app
                .storage
                .expenses
                .get(id)
                .map(|e| {
                    format!(
                        "{}  {}",
                        e.description,
                        e.amount.format_with_symbol(&app.settings.currency_symbol)
                    )
                });
            dialogs::confirm::render(frame, "Delete this expense?", detail.as_deref());
        }
        ActiveDialog::AddExpense | ActiveDialog::EditExpense(_) => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
