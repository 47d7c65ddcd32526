// src/ui/widgets/footer.rs

use crate::app::{App, Focus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the status bar with the last action and in-flight scan count.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(app.status.clone())];
    if !app.in_flight.is_empty() {
        spans.push(Span::styled(
            format!("  [{} scan(s) running]", app.in_flight.len()),
            Style::new().fg(Color::Cyan),
        ));
    }
    let status = Paragraph::new(Line::from(spans)).style(Style::new().reversed());
    frame.render_widget(status, area);
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(Color::Yellow));
    let spans = match app.focus {
        Focus::Tree => Line::from(vec![
            key("Tab"),
            Span::raw(" target, "),
            key("↑ ↓"),
            Span::raw(" browse, "),
            key("← →"),
            Span::raw(" scroll log, "),
            key("Q"),
            Span::raw(" quit."),
        ]),
        Focus::Url | Focus::Port => Line::from(vec![
            key("Enter"),
            Span::raw(" to scan, "),
            key("Tab"),
            Span::raw(" next field, "),
            key("Esc"),
            Span::raw(" back to tools."),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
