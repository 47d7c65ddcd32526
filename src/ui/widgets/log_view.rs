// src/ui/widgets/log_view.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the session log panel.
///
/// Shows the newest lines that fit, with the timestamp dimmed. Long lines
/// are reached with the horizontal scrollbar.
///
/// # Arguments
///
/// * `frame` - The mutable frame to render onto.
/// * `app` - Application state holding the log lines and scroll state.
/// * `area` - The `Rect` in which to render this widget.
pub fn render_log_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("Session Log")
        .borders(Borders::ALL);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let max_width = app.log_content.iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    app.log_horizontal_scroll_state = app.log_horizontal_scroll_state.content_length(max_width);

    // Keep the last row free for the scrollbar.
    let visible = inner_area.height.saturating_sub(1) as usize;
    let skip = app.log_content.len().saturating_sub(visible);

    let log_lines: Vec<Line> = app.log_content.iter().skip(skip).map(|line_str| {
        // "DATE TIME MESSAGE"
        let mut parts = line_str.splitn(3, ' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(date), Some(time), Some(rest)) => Line::from(vec![
                Span::styled(format!("{} {}", date, time), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {}", rest), Style::default().fg(Color::Green)),
            ]),
            _ => Line::from(line_str.as_str()),
        }
    }).collect();

    let log_paragraph = Paragraph::new(log_lines)
        .scroll((0, scroll_offset(app.log_horizontal_scroll)));
    frame.render_widget(log_paragraph, inner_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
        .thumb_symbol("■");
    let scrollbar_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    frame.render_stateful_widget(
        scrollbar,
        scrollbar_area,
        &mut app.log_horizontal_scroll_state,
    );
}

// `Paragraph::scroll` takes u16; anything past that is pinned to the end.
fn scroll_offset(position: usize) -> u16 {
    u16::try_from(position).unwrap_or(u16::MAX)
}
