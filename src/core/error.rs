// src/core/error.rs

//! Error types for the tool registry and dispatch core.
//!
//! Every failure path in the core returns one of these instead of
//! terminating the process. The shell decides how each one is surfaced.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading `config.json` into a `Catalog`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed JSON.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is JSON but a required key is absent or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Schema(String),
}

/// Lookup failures on the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tool not found: {0}")]
    NotFound(String),
}

/// Selection misses in the navigator. Expected, never logged as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("no tool selected")]
    NoneSelected,
}

/// Validation failures on the raw target fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing host")]
    MissingHost,

    #[error("invalid port")]
    InvalidPort,
}

/// Failures that stop a request before it crosses the engine boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The host cannot be represented as a C string.
    #[error("encoding error")]
    Encoding,

    /// No engine library was loaded at startup.
    #[error("engine unavailable")]
    EngineUnavailable,
}

/// Failures while loading the native engine library.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load engine library {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("engine library {} does not export `{symbol}`: {source}", path.display())]
    Symbol {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}
