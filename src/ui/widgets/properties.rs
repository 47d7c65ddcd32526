// src/ui/widgets/properties.rs

use crate::app::App;
use crate::core::models::PropertyValue;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the properties of the selected tool.
///
/// Nested values are expanded with indentation so every configured key is
/// visible without interpreting it.
pub fn render_properties(frame: &mut Frame, app: &App, area: Rect) {
    let entry = app
        .selected_tool
        .as_deref()
        .and_then(|name| app.navigator.catalog().entry(name).ok());

    let Some(entry) = entry else {
        let block = Block::default().borders(Borders::ALL).title("Properties");
        let hint = Paragraph::new("Select a tool to see its properties.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Properties: {}", entry.name));

    let mut lines = Vec::new();
    if entry.properties.is_empty() {
        lines.push(Line::from("No properties.".fg(Color::DarkGray)));
    }
    for (key, value) in &entry.properties {
        push_lines(&mut lines, key, value, 0);
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

fn push_lines(lines: &mut Vec<Line<'static>>, key: &str, value: &PropertyValue, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        PropertyValue::Scalar(s) => lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(format!("{}: ", key), Style::default().fg(Color::Cyan)),
            Span::raw(s.clone()),
        ])),
        PropertyValue::Nested(children) => {
            lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("{}:", key), Style::default().fg(Color::Cyan)),
            ]));
            for (child_key, child) in children {
                push_lines(lines, child_key, child, depth + 1);
            }
        }
    }
}
