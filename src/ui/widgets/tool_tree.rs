// src/ui/widgets/tool_tree.rs

use crate::app::{App, Focus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Renders the catalog as an indented list.
///
/// Tool rows are bold; property rows are indented by depth. The highlighted
/// row follows `app.tree_state`.
pub fn render_tool_tree(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::Tree {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Tools (↑ ↓)");

    if app.navigator.rows().is_empty() {
        let empty = Paragraph::new("No tools configured.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .navigator
        .rows()
        .iter()
        .map(|row| {
            if row.is_tool() {
                ListItem::new(Line::from(Span::styled(row.label.clone(), Style::new().bold())))
            } else {
                let indent = "  ".repeat(row.depth);
                ListItem::new(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(row.label.clone(), Style::default().fg(Color::Gray)),
                ]))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut app.tree_state);
}
