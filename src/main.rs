// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod core;
mod logging;
mod settings;
mod startup;
mod ui;

use app::{App, Focus};
use crate::core::dispatch::DispatchGateway;
use crate::core::models::DispatchEvent;
use crate::core::navigator::CatalogNavigator;
use settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::initialize_logging()?;
    let settings = Settings::from_env();
    info!(?settings, log = %log_path.display(), "Starting up.");

    let (catalog, catalog_line) = startup::load_catalog(&settings.config_path);
    let (engine, engine_line) = startup::load_engine(&settings.engine_path);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let gateway = DispatchGateway::new(engine, tx);
    info!(engine = gateway.has_engine(), "Dispatch gateway ready.");

    let mut app = App::new(CatalogNavigator::new(Arc::new(catalog)));
    app.log(catalog_line);
    app.log(engine_line);

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app, &gateway, &mut rx);

    // --- Restore Terminal ---
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    info!("Shutting down.");
    result
}

/// The interactive loop. Never blocks for longer than one poll interval.
fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    gateway: &DispatchGateway,
    rx: &mut mpsc::UnboundedReceiver<DispatchEvent>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, gateway);
                }
            }
        }

        // Completions are applied here, on the UI side, never inline.
        while let Ok(event) = rx.try_recv() {
            app.on_dispatch_event(event);
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, gateway: &DispatchGateway) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    if key.code == KeyCode::Tab {
        app.cycle_focus();
        return;
    }
    match app.focus {
        Focus::Tree => handle_tree_input(app, key.code),
        Focus::Url | Focus::Port => handle_field_input(app, key.code, gateway),
    }
}

/// Keys while the tool tree has focus.
fn handle_tree_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Left => app.scroll_log_left(),
        KeyCode::Right => app.scroll_log_right(),
        KeyCode::Enter => app.set_focus(Focus::Url),
        _ => {}
    }
}

/// Keys while the URL or port field has focus.
fn handle_field_input(app: &mut App, key_code: KeyCode, gateway: &DispatchGateway) {
    match key_code {
        KeyCode::Esc => app.set_focus(Focus::Tree),
        KeyCode::Enter => app.on_submit(gateway),
        KeyCode::Backspace => {
            if let Some(field) = app.focused_input() {
                field.text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = app.focused_input() {
                field.text.push(c);
            }
        }
        _ => {}
    }
}
