//! Status bar view
//!
//! Shows row counts, the displayed total, the sort state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.current_view();

    let mut spans = vec![
        Span::styled(
            format!(" {} of {} shown", view.rows.len(), view.matching),
            Style::default().fg(Color::White),
        ),
    ];
    if view.matching != view.total {
        spans.push(Span::styled(
            format!(" ({} total)", view.total),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Total: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        view.displayed_total()
            .format_with_symbol(&app.settings.currency_symbol),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("Sort: {} {}", app.view.sort_field, app.view.sort_order.arrow()),
        Style::default().fg(Color::Cyan),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " a:Add  /:Filter  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    if padding_len > 0 {
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
