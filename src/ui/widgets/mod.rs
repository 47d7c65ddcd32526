// src/ui/widgets/mod.rs

pub mod footer;     // Status bar and key hints.
pub mod input;      // Target URL and port fields.
pub mod log_view;   // Session log panel.
pub mod properties; // Properties of the selected tool.
pub mod tool_tree;  // The catalog tree.
