// src/core/engine.rs

//! Handle on the external scan engine.
//!
//! The engine is a native library exporting
//! `void process_data_input(char* host, int port)`. The port travels as a
//! C `int`; the older string-port variant of the entry point is not
//! supported.

use crate::core::error::EngineError;
use libloading::Library;
use std::ffi::{c_char, c_int, CStr};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Name of the exported entry point.
pub const ENTRY_POINT: &str = "process_data_input";

type EntryFn = unsafe extern "C" fn(*const c_char, c_int);

/// Something that accepts a scan target across the engine boundary.
///
/// Implementations must tolerate concurrent calls from several workers.
pub trait ScanEngine: Send + Sync {
    /// Hands one target to the engine. Blocks for as long as the engine does.
    fn process_data_input(&self, host: &CStr, port: c_int);
}

/// A scan engine loaded from a shared library at runtime.
pub struct NativeEngine {
    path: PathBuf,
    entry: EntryFn,
    // Keeps `entry` valid for the lifetime of this value.
    _library: Library,
}

impl NativeEngine {
    /// Loads the library and resolves `process_data_input` once.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref().to_path_buf();
        // SAFETY: loading runs the library's initializers; the engine library
        // is a trusted part of the installation.
        let library = unsafe { Library::new(&path) }.map_err(|source| EngineError::Load {
            path: path.clone(),
            source,
        })?;
        // SAFETY: the engine's entry point has the `EntryFn` signature.
        let entry: EntryFn = unsafe {
            *library
                .get::<EntryFn>(ENTRY_POINT.as_bytes())
                .map_err(|source| EngineError::Symbol {
                    path: path.clone(),
                    symbol: ENTRY_POINT,
                    source,
                })?
        };
        info!(path = %path.display(), "Native scan engine loaded.");
        Ok(Self { path, entry, _library: library })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScanEngine for NativeEngine {
    fn process_data_input(&self, host: &CStr, port: c_int) {
        // SAFETY: `host` is NUL-terminated and outlives the call; the
        // library stays loaded while `self` exists.
        unsafe { (self.entry)(host.as_ptr(), port) }
    }
}

impl fmt::Debug for NativeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeEngine").field("path", &self.path).finish()
    }
}

/// Shared, explicitly constructed handle on the engine.
///
/// Created once at startup and moved into the dispatch gateway. Cloning
/// shares the same engine.
#[derive(Clone)]
pub struct EngineClient {
    engine: Arc<dyn ScanEngine>,
    label: String,
}

impl EngineClient {
    /// Loads the native engine from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let engine = NativeEngine::load(path)?;
        let label = engine.path().display().to_string();
        Ok(Self { engine: Arc::new(engine), label })
    }

    /// Wraps an already constructed engine.
    pub fn new(engine: impl ScanEngine + 'static, label: impl Into<String>) -> Self {
        Self { engine: Arc::new(engine), label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn call(&self, host: &CStr, port: c_int) {
        self.engine.process_data_input(host, port);
    }
}

impl fmt::Debug for EngineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineClient").field("label", &self.label).finish()
    }
}
