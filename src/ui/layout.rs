// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each `Rect` is the drawable area of one widget, computed once per frame.
pub struct AppLayout {
    pub tree: Rect,
    pub url: Rect,
    pub port: Rect,
    pub properties: Rect,
    pub log_panel: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Creates the complete application layout.
///
/// The frame is split into the main area, a one-line status bar and a
/// one-line footer. The main area puts the tool tree on the left and, on
/// the right, the target inputs above the selected tool's properties and
/// the session log.
///
/// # Arguments
/// * `frame_size` - The `Rect` representing the total size of the terminal frame.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(content_chunks[1]);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(right_chunks[0]);

    AppLayout {
        tree: content_chunks[0],
        url: input_chunks[0],
        port: input_chunks[1],
        properties: right_chunks[1],
        log_panel: right_chunks[2],
        status: main_chunks[1],
        footer: main_chunks[2],
    }
}
