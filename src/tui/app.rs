//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The table rows are never cached: every draw derives them from the store
//! and the current view controls.

use std::time::{Duration, Instant};

use crate::config::settings::Settings;
use crate::models::{Expense, ExpenseId};
use crate::services::form::today;
use crate::services::{
    ExpenseService, ExpenseView, SortField, SubmitOutcome, ViewControls,
};
use crate::storage::Storage;

use super::dialogs::expense::{ExpenseField, ExpenseFormState};
use super::widgets::input::TextInput;

/// How long a status message stays on screen
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// A form dialog has the keyboard
    Editing,
    /// Typing into the filter box
    Filter,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    ConfirmDelete(ExpenseId),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Filter, sort and pagination controls
    pub view: ViewControls,

    /// Selected row in the displayed table
    pub selected_index: usize,

    /// Add/edit form state
    pub expense_form: ExpenseFormState,

    /// Filter box
    pub filter_input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    status_set_at: Option<Instant>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            view: ViewControls::from_settings(settings),
            selected_index: 0,
            expense_form: ExpenseFormState::new(today()),
            filter_input: TextInput::new().placeholder("press / to search"),
            status_message: None,
            status_set_at: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at {
            if now.duration_since(set_at) >= STATUS_TIMEOUT {
                self.clear_status();
            }
        }
    }

    /// Rows as they are currently displayed
    pub fn current_view(&self) -> ExpenseView<'_> {
        self.view.derive(self.storage.expenses.all())
    }

    fn visible_ids(&self) -> Vec<ExpenseId> {
        self.current_view()
            .rows
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    /// The expense under the selection cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.current_view().rows.get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<ExpenseId> {
        self.selected_expense().map(|e| e.id.clone())
    }

    /// Keep the selection inside the displayed rows
    pub fn clamp_selection(&mut self) {
        let len = self.current_view().rows.len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Point the selection at `id` if it is displayed
    fn reselect(&mut self, id: &ExpenseId) {
        match self.visible_ids().iter().position(|v| v == id) {
            Some(index) => self.selected_index = index,
            None => self.clamp_selection(),
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.current_view().rows.len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.current_view().rows.len().saturating_sub(1);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form.start_create(today());
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::EditExpense(id) => {
                let Some(expense) = self.storage.expenses.get(id).cloned() else {
                    self.set_status(format!("Expense {} not found", id));
                    return;
                };
                self.expense_form.start_edit(&expense);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::ConfirmDelete(_) | ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Open the form for the selected row
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.open_dialog(ActiveDialog::EditExpense(id));
        }
    }

    /// Ask before deleting the selected row
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    /// Submit the open form
    ///
    /// A rejected submit keeps the dialog open with everything typed so
    /// far and moves focus to the offending field.
    pub fn submit_form(&mut self) {
        self.expense_form.commit_input();

        let mut service = ExpenseService::new(&mut *self.storage);
        let result = self.expense_form.form.submit(&mut service, today());

        match result {
            Ok(SubmitOutcome::Created(expense)) => {
                self.close_dialog();
                self.reselect(&expense.id);
                self.set_status(format!("Added '{}'", expense.description));
            }
            Ok(SubmitOutcome::Updated(expense)) => {
                self.close_dialog();
                self.reselect(&expense.id);
                self.set_status(format!("Updated '{}'", expense.description));
            }
            Ok(SubmitOutcome::Rejected(reason)) => {
                tracing::debug!(%reason, "form submit rejected");
                self.expense_form.set_focus(ExpenseField::for_error(&reason));
            }
            Ok(SubmitOutcome::Stale(id)) => {
                self.close_dialog();
                self.clamp_selection();
                self.set_status(format!("Expense {} no longer exists", id));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save expense");
                self.set_status(format!("Failed to save: {}", e));
            }
        }
    }

    /// Abandon the open form
    pub fn cancel_form(&mut self) {
        self.expense_form.form.cancel(today());
        self.close_dialog();
    }

    /// Delete after confirmation
    pub fn confirm_delete(&mut self, id: &ExpenseId) {
        let mut service = ExpenseService::new(&mut *self.storage);
        match service.delete(id) {
            Ok(Some(removed)) => {
                self.set_status(format!("Deleted '{}'", removed.description));
            }
            Ok(None) => self.set_status("Nothing to delete"),
            Err(e) => {
                tracing::error!(error = %e, "failed to delete expense");
                self.set_status(format!("Failed to delete: {}", e));
            }
        }
        self.clamp_selection();
    }

    /// Sort by `field`, keeping the selected expense selected
    pub fn toggle_sort(&mut self, field: SortField) {
        let selected = self.selected_id();
        self.view.toggle_sort(field);
        match selected {
            Some(id) => self.reselect(&id),
            None => self.select_first(),
        }
    }

    /// Switch between the full list and one page
    pub fn toggle_show_all(&mut self) {
        self.view.toggle_show_all();
        self.clamp_selection();
    }

    /// Start typing into the filter box
    pub fn begin_filter(&mut self) {
        self.filter_input.set_content(self.view.filter.clone());
        self.filter_input.focused = true;
        self.input_mode = InputMode::Filter;
    }

    /// Apply the filter box text to the view
    pub fn apply_filter(&mut self) {
        self.view.set_filter(self.filter_input.value());
        self.select_first();
    }

    /// Leave the filter box, keeping the filter or clearing it
    pub fn end_filter(&mut self, keep: bool) {
        if !keep {
            self.filter_input.clear();
            self.apply_filter();
        }
        self.filter_input.focused = false;
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    fn add(app: &mut App<'_>, description: &str, amount: &str) {
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.input.set_content(description);
        app.expense_form.set_focus(ExpenseField::Amount);
        app.expense_form.input.set_content(amount);
        app.submit_form();
    }

    #[test]
    fn test_add_through_form() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        add(&mut app, "Coffee", "3.50");

        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.current_view().rows.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Added 'Coffee'"));
    }

    #[test]
    fn test_rejected_submit_keeps_dialog_open() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        add(&mut app, "Coffee", "0");

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.focused_field, ExpenseField::Amount);
        assert_eq!(app.expense_form.form.description, "Coffee");
        assert_eq!(app.expense_form.input.value(), "0");
        assert!(app.status_message.is_none());
        assert_eq!(app.storage.expenses.count(), 0);
    }

    #[test]
    fn test_edit_selected_and_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        add(&mut app, "Coffee", "3.50");

        app.edit_selected();
        assert!(matches!(app.active_dialog, ActiveDialog::EditExpense(_)));
        app.expense_form.set_focus(ExpenseField::Amount);
        app.expense_form.input.set_content("4.00");
        app.submit_form();

        assert_eq!(app.storage.expenses.count(), 1);
        assert_eq!(app.storage.expenses.all()[0].amount.to_string(), "4.00");

        app.request_delete_selected();
        let ActiveDialog::ConfirmDelete(id) = app.active_dialog.clone() else {
            panic!("expected delete confirmation");
        };
        app.close_dialog();
        app.confirm_delete(&id);
        assert_eq!(app.storage.expenses.count(), 0);
        app.confirm_delete(&id);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to delete"));
    }

    #[test]
    fn test_filter_resets_selection() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        add(&mut app, "Lunch", "10");
        add(&mut app, "Taxi", "5");
        app.select_last();

        app.begin_filter();
        app.filter_input.insert('x');
        app.apply_filter();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.current_view().matching, 1);

        app.end_filter(false);
        assert_eq!(app.current_view().matching, 2);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_status_expires() {
        let (_temp_dir, mut storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        app.set_status("hello");
        app.expire_status(Instant::now());
        assert!(app.status_message.is_some());
        app.expire_status(Instant::now() + STATUS_TIMEOUT);
        assert!(app.status_message.is_none());
    }
}
