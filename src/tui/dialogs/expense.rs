//! Expense entry/edit dialog
//!
//! Modal form for adding or editing an expense. Text fields are edited
//! through a single input buffer that follows focus; category and payment
//! method are selectors cycled with the arrow keys.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Expense;
use crate::services::{ExpenseForm, FormError};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
    Category,
    Date,
    PaymentMethod,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::PaymentMethod,
            Self::PaymentMethod => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::PaymentMethod,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::PaymentMethod => Self::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
            Self::PaymentMethod => "Payment",
        }
    }

    /// Selectors cycle through a fixed vocabulary instead of taking text
    pub fn is_selector(self) -> bool {
        matches!(self, Self::Category | Self::PaymentMethod)
    }

    /// The field a rejected submit should send the user back to
    pub fn for_error(error: &FormError) -> Self {
        match error {
            FormError::MissingDescription => Self::Description,
            FormError::MissingAmount
            | FormError::InvalidAmount(_)
            | FormError::NonPositiveAmount => Self::Amount,
            FormError::InvalidDate(_) => Self::Date,
        }
    }

    const ALL: [ExpenseField; 5] = [
        Self::Description,
        Self::Amount,
        Self::Category,
        Self::Date,
        Self::PaymentMethod,
    ];
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// The form being edited
    pub form: ExpenseForm,

    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Edit buffer for the focused text field
    pub input: TextInput,
}

impl ExpenseFormState {
    /// A blank create form
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            form: ExpenseForm::new(today),
            focused_field: ExpenseField::Description,
            input: TextInput::new().focused(true),
        };
        state.load_input();
        state
    }

    /// Reset to a blank create form with the description focused
    pub fn start_create(&mut self, today: NaiveDate) {
        self.form.start_create(today);
        self.focused_field = ExpenseField::Description;
        self.load_input();
    }

    /// Populate from an existing expense with the description focused
    pub fn start_edit(&mut self, expense: &Expense) {
        self.form.start_edit(expense);
        self.focused_field = ExpenseField::Description;
        self.load_input();
    }

    /// Move focus, keeping whatever was typed in the field being left
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.commit_input();
        self.focused_field = field;
        self.load_input();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Write the edit buffer back into the form
    pub fn commit_input(&mut self) {
        let value = self.input.value().to_string();
        if let Some(text) = self.text_field_mut(self.focused_field) {
            *text = value;
        }
    }

    fn load_input(&mut self) {
        let value = self.display_value(self.focused_field);
        self.input.set_content(value);
    }

    fn text_field_mut(&mut self, field: ExpenseField) -> Option<&mut String> {
        match field {
            ExpenseField::Description => Some(&mut self.form.description),
            ExpenseField::Amount => Some(&mut self.form.amount),
            ExpenseField::Date => Some(&mut self.form.date),
            ExpenseField::Category | ExpenseField::PaymentMethod => None,
        }
    }

    /// Current value of a field as shown in the dialog
    pub fn display_value(&self, field: ExpenseField) -> String {
        match field {
            ExpenseField::Description => self.form.description.clone(),
            ExpenseField::Amount => self.form.amount.clone(),
            ExpenseField::Date => self.form.date.clone(),
            ExpenseField::Category => self.form.category.to_string(),
            ExpenseField::PaymentMethod => self.form.payment_method.to_string(),
        }
    }

    /// Cycle the focused selector
    pub fn cycle(&mut self, forward: bool) {
        match (self.focused_field, forward) {
            (ExpenseField::Category, true) => self.form.next_category(),
            (ExpenseField::Category, false) => self.form.prev_category(),
            (ExpenseField::PaymentMethod, true) => self.form.next_payment_method(),
            (ExpenseField::PaymentMethod, false) => self.form.prev_payment_method(),
            _ => {}
        }
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());

    frame.render_widget(Clear, area);

    let title = match &app.active_dialog {
        ActiveDialog::EditExpense(_) => " Edit Expense ",
        _ => " Add Expense ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Payment
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let state = &app.expense_form;
    for (row, field) in ExpenseField::ALL.into_iter().enumerate() {
        let line = field_line(state, field, &app.settings.currency_symbol);
        frame.render_widget(Paragraph::new(line), chunks[row]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn field_line(state: &ExpenseFormState, field: ExpenseField, currency: &str) -> Line<'static> {
    let focused = state.focused_field == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label = match field {
        ExpenseField::Amount => format!("{} ({})", field.label(), currency),
        _ => field.label().to_string(),
    };
    let mut spans = vec![Span::styled(format!("{:>14}: ", label), label_style)];

    if field.is_selector() {
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value = state.display_value(field);
        if focused {
            spans.push(Span::styled(format!("◀ {} ▶", value), value_style));
        } else {
            spans.push(Span::styled(value, value_style));
        }
    } else if focused {
        spans.extend(state.input.spans(Style::default().fg(Color::White)));
    } else {
        spans.push(Span::styled(
            state.display_value(field),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let selector = app.expense_form.focused_field.is_selector();

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.expense_form.prev_field()
        }
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),

        KeyCode::Left if selector => app.expense_form.cycle(false),
        KeyCode::Right if selector => app.expense_form.cycle(true),
        KeyCode::Char(' ') if selector => app.expense_form.cycle(true),

        KeyCode::Left => app.expense_form.input.move_left(),
        KeyCode::Right => app.expense_form.input.move_right(),
        KeyCode::Home => app.expense_form.input.move_start(),
        KeyCode::End => app.expense_form.input.move_end(),
        KeyCode::Backspace if !selector => app.expense_form.input.backspace(),
        KeyCode::Delete if !selector => app.expense_form.input.delete(),
        KeyCode::Char(c) if !selector => app.expense_form.input.insert(c),

        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, PaymentMethod};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = ExpenseField::Description;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, ExpenseField::Description);
        assert_eq!(ExpenseField::Description.prev(), ExpenseField::PaymentMethod);
    }

    #[test]
    fn test_typing_commits_on_focus_change() {
        let mut state = ExpenseFormState::new(day(1));
        for c in "Chai".chars() {
            state.input.insert(c);
        }
        state.next_field();
        assert_eq!(state.form.description, "Chai");
        assert_eq!(state.focused_field, ExpenseField::Amount);
        assert_eq!(state.input.value(), "");

        state.input.insert('2');
        state.prev_field();
        assert_eq!(state.form.amount, "2");
        assert_eq!(state.input.value(), "Chai");
    }

    #[test]
    fn test_selectors_do_not_take_text() {
        let mut state = ExpenseFormState::new(day(1));
        state.set_focus(ExpenseField::Category);
        state.cycle(true);
        assert_eq!(state.form.category, Category::Transportation);

        state.set_focus(ExpenseField::PaymentMethod);
        state.cycle(false);
        assert_eq!(state.form.payment_method, PaymentMethod::Cash);
        assert_eq!(state.form.description, "");
    }

    #[test]
    fn test_start_edit_loads_description() {
        let expense = Expense::new(
            ExpenseId::new("42"),
            "Groceries",
            Money::from_cents(2599),
            Category::Shopping,
            day(3),
            PaymentMethod::Debit,
        );
        let mut state = ExpenseFormState::new(day(1));
        state.set_focus(ExpenseField::Date);
        state.start_edit(&expense);

        assert_eq!(state.focused_field, ExpenseField::Description);
        assert_eq!(state.input.value(), "Groceries");
        assert_eq!(state.display_value(ExpenseField::Amount), "25.99");
        assert_eq!(state.display_value(ExpenseField::Date), "2024-02-03");
    }

    #[test]
    fn test_error_focus_targets() {
        assert_eq!(
            ExpenseField::for_error(&FormError::NonPositiveAmount),
            ExpenseField::Amount
        );
        assert_eq!(
            ExpenseField::for_error(&FormError::InvalidDate("x".into())),
            ExpenseField::Date
        );
    }
}
