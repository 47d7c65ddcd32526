// src/startup.rs

use crate::core::catalog::Catalog;
use crate::core::config_loader;
use crate::core::engine::EngineClient;
use std::path::Path;
use tracing::{error, info, warn};

/// Loads the catalog, falling back to an empty one on any error.
///
/// A broken configuration leaves the tree empty; it never stops the shell.
/// Returns the catalog together with the line to show in the session log.
pub fn load_catalog(path: &Path) -> (Catalog, String) {
    match config_loader::load(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!(path = %path.display(), "Configuration defines no tools.");
            }
            info!(tools = ?catalog.names().collect::<Vec<_>>(), "Catalog ready.");
            let line = format!("Loaded {} tool(s) from {}", catalog.len(), path.display());
            (catalog, line)
        }
        Err(e) => {
            error!(error = %e, "Configuration unavailable, starting with an empty catalog.");
            (Catalog::empty(), format!("Error: {}", e))
        }
    }
}

/// Loads the scan engine. `None` means every submission will be rejected.
pub fn load_engine(path: &Path) -> (Option<EngineClient>, String) {
    match EngineClient::load(path) {
        Ok(engine) => {
            let line = format!("Scan engine ready: {}", engine.label());
            (Some(engine), line)
        }
        Err(e) => {
            warn!(error = %e, "Scan engine unavailable, submissions will be rejected.");
            (None, format!("Error: {}", e))
        }
    }
}
