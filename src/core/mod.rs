// src/core/mod.rs

// The tool registry and dispatch core. Nothing here touches the terminal;
// the UI reads from these modules and reports user actions back.

/// Typed errors for every failure path of the core.
pub mod error;

/// Catalog entries, property values and dispatch messages.
pub mod models;

/// Reads `config.json` into a `Catalog`.
pub mod config_loader;

/// The immutable, ordered set of configured tools.
pub mod catalog;

/// Tree rows for display and selection-id lookup.
pub mod navigator;

/// Validation of the raw target fields.
pub mod request;

/// The native scan engine behind a fixed C entry point.
pub mod engine;

/// Non-blocking hand-off of targets to the engine.
pub mod dispatch;
