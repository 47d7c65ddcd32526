// src/app.rs

use crate::core::dispatch::DispatchGateway;
use crate::core::models::{DispatchEvent, DispatchId, DispatchOutcome};
use crate::core::navigator::CatalogNavigator;
use crate::core::request::{self, HOST_PLACEHOLDER, PORT_PLACEHOLDER};
use chrono::Local;
use ratatui::widgets::{ListState, ScrollbarState};
use std::collections::HashSet;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info};

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Focus {
    #[strum(to_string = "Tools")]
    Tree,
    #[strum(to_string = "Target URL")]
    Url,
    #[strum(to_string = "Port")]
    Port,
}

impl Focus {
    fn next(self) -> Self {
        Focus::iter()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or(Focus::Tree)
    }
}

/// A text field pre-filled with example text.
///
/// The example text is cleared on focus and restored when the field is
/// left empty, so an untouched field still holds the placeholder.
#[derive(Debug, Clone)]
pub struct InputField {
    pub text: String,
    placeholder: &'static str,
}

impl InputField {
    pub fn new(placeholder: &'static str) -> Self {
        Self { text: placeholder.to_string(), placeholder }
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == self.placeholder
    }

    pub fn focus_in(&mut self) {
        if self.is_placeholder() {
            self.text.clear();
        }
    }

    pub fn focus_out(&mut self) {
        if self.text.is_empty() {
            self.text = self.placeholder.to_string();
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub navigator: CatalogNavigator,
    pub tree_state: ListState,
    /// Name of the tool whose properties are shown.
    pub selected_tool: Option<String>,
    pub url_input: InputField,
    pub port_input: InputField,
    pub status: String,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
    pub in_flight: HashSet<DispatchId>,
}

impl App {
    pub fn new(navigator: CatalogNavigator) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Tree,
            navigator,
            tree_state: ListState::default(),
            selected_tool: None,
            url_input: InputField::new(HOST_PLACEHOLDER),
            port_input: InputField::new(PORT_PLACEHOLDER),
            status: "Ready".to_string(),
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
            in_flight: HashSet::new(),
        }
    }

    /// Appends a timestamped line to the session log panel.
    pub fn log(&mut self, message: impl AsRef<str>) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.log_content.push(format!("{} {}", stamp, message.as_ref()));
    }

    // --- Presentation callbacks ---

    /// Reacts to the tree reporting a selected row id.
    ///
    /// Unknown ids leave the current selection untouched.
    pub fn on_tool_selected(&mut self, id: &str) {
        let Ok(entry) = self.navigator.selection(id) else {
            debug!(id, "Selection did not match a tool.");
            return;
        };
        let name = entry.name.clone();
        if self.selected_tool.as_deref() != Some(name.as_str()) {
            self.log(format!("Viewing section: {}", name));
        }
        self.status = format!("Selected: {}", name);
        self.selected_tool = Some(name);
    }

    /// Validates the target fields and hands the request to the gateway.
    pub fn on_submit(&mut self, gateway: &DispatchGateway) {
        let request = match request::build(&self.url_input.text, &self.port_input.text) {
            Ok(request) => request,
            Err(e) => {
                info!(reason = %e, "Submission rejected.");
                self.status = format!("Rejected: {}", e);
                self.log(format!("Submission rejected: {}", e));
                return;
            }
        };

        let target = request.to_string();
        match gateway.dispatch(request) {
            DispatchOutcome::Accepted(id) => {
                self.in_flight.insert(id);
                self.status = format!("Submitted: {}", target);
                self.log(format!("Scanning {} ({})...", target, id));
            }
            DispatchOutcome::Rejected(reason) => {
                self.status = format!("Dispatch failed: {}", reason);
                self.log(format!("Dispatch of {} failed: {}", target, reason));
            }
        }
    }

    /// Reacts to a worker finishing an engine call.
    pub fn on_dispatch_event(&mut self, event: DispatchEvent) {
        self.in_flight.remove(&event.id());
        match event {
            DispatchEvent::Completed { id, host, port, elapsed } => {
                self.log(format!(
                    "Scan complete: {}:{} ({}, {:.1}s)",
                    host,
                    port,
                    id,
                    elapsed.as_secs_f64()
                ));
            }
            DispatchEvent::Failed { id, reason } => {
                self.log(format!("Scan {} failed: {}", id, reason));
            }
        }
        if self.in_flight.is_empty() {
            self.status = "Ready".to_string();
        }
    }

    // --- Navigation ---

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        match self.focus {
            Focus::Url => self.url_input.focus_out(),
            Focus::Port => self.port_input.focus_out(),
            Focus::Tree => {}
        }
        match focus {
            Focus::Url => self.url_input.focus_in(),
            Focus::Port => self.port_input.focus_in(),
            Focus::Tree => {}
        }
        self.focus = focus;
    }

    pub fn focused_input(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::Url => Some(&mut self.url_input),
            Focus::Port => Some(&mut self.port_input),
            Focus::Tree => None,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.navigator.rows().len();
        if len == 0 {
            return;
        }
        let next = self.tree_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.select_row(next);
    }

    pub fn select_previous(&mut self) {
        if self.navigator.rows().is_empty() {
            return;
        }
        let previous = self.tree_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.select_row(previous);
    }

    fn select_row(&mut self, index: usize) {
        self.tree_state.select(Some(index));
        if let Some(id) = self.navigator.rows().get(index).map(|r| r.id.clone()) {
            self.on_tool_selected(&id);
        }
    }

    pub fn scroll_log_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(1);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_log_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(1);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
