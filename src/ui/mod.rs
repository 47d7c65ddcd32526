// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::tool_tree::render_tool_tree(frame, app, layout.tree);
    widgets::input::render_input(frame, app, layout.url, layout.port);
    widgets::properties::render_properties(frame, app, layout.properties);
    widgets::log_view::render_log_view(frame, app, layout.log_panel);
    widgets::footer::render_status(frame, app, layout.status);
    widgets::footer::render_footer(frame, app, layout.footer);
}
