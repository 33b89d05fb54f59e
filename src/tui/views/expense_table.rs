//! Expense table view
//!
//! Shows the filtered, sorted and paginated expenses

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::SortField;
use crate::tui::app::{App, InputMode};

/// Render the title bar with the filter box
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let filtering = app.input_mode == InputMode::Filter;
    let border_color = if filtering { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(Color::Cyan))];
    if filtering {
        spans.extend(app.filter_input.spans(Style::default().fg(Color::White)));
    } else if app.view.filter.is_empty() {
        spans.push(Span::styled(
            "(none, press / to search)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            app.view.filter.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.current_view();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if view.is_truncated() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(
                " Showing {} of {} (t: show all) ",
                view.rows.len(),
                view.matching
            ),
            Style::default().fg(Color::Yellow),
        )));
    } else if app.view.show_all && view.matching > app.view.page_size {
        block = block.title_bottom(Line::from(Span::styled(
            " t: show less ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if view.rows.is_empty() {
        let message = if view.total == 0 {
            "No expenses yet. Press 'a' to add one."
        } else {
            "No expenses match the filter."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Description
        Constraint::Length(15), // Category
        Constraint::Length(8),  // Payment
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        header_cell(app, "Date", Some(SortField::Date)),
        header_cell(app, "Description", Some(SortField::Description)),
        header_cell(app, "Category", None),
        header_cell(app, "Payment", None),
        header_cell(app, "Amount", Some(SortField::Amount)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(app.settings.format_date(expense.date)),
                Cell::from(truncate_string(&expense.description, 40)),
                Cell::from(expense.category.name()),
                Cell::from(expense.payment_method.name()),
                Cell::from(Line::from(
                    expense
                        .amount
                        .format_with_symbol(&app.settings.currency_symbol),
                ).right_aligned())
                .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(view.rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Column title, with an arrow on the active sort column
fn header_cell(app: &App, title: &str, field: Option<SortField>) -> Cell<'static> {
    let text = match field {
        Some(field) if field == app.view.sort_field => {
            format!("{} {}", title, app.view.sort_order.arrow())
        }
        _ => title.to_string(),
    };
    Cell::from(text).style(Style::default().add_modifier(Modifier::BOLD))
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_string("₹₹₹₹₹₹", 3), "₹₹…");
    }
}
