// src/ui/widgets/input.rs

use crate::app::{App, Focus, InputField};
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders the target URL and port fields.
pub fn render_input(frame: &mut Frame, app: &App, url_area: Rect, port_area: Rect) {
    render_field(frame, &app.url_input, Focus::Url, app.focus, url_area);
    render_field(frame, &app.port_input, Focus::Port, app.focus, port_area);
}

fn render_field(frame: &mut Frame, field: &InputField, own: Focus, focus: Focus, area: Rect) {
    let focused = own == focus;
    let border_style = if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    // Untouched fields show their example text in grey.
    let text_style = if field.is_placeholder() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(own.to_string());
    let paragraph = Paragraph::new(field.text.as_str()).block(block).style(text_style);
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position((cursor_x(area, &field.text), area.y.saturating_add(1)));
    }
}

/// Column of the cursor after `text`, kept inside the field's borders.
fn cursor_x(area: Rect, text: &str) -> u16 {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let offset = typed.min(area.width.saturating_sub(2));
    area.x.saturating_add(offset).saturating_add(1)
}
