// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// Prefix shared by every environment variable the binary reads.
    pub static ref ENV_PREFIX: String = env!("CARGO_CRATE_NAME").to_uppercase();
    /// `HACKAVOLT_RECON_LOGLEVEL`, consulted when `RUST_LOG` is unset.
    pub static ref LOG_LEVEL_ENV: String = format!("{}_LOGLEVEL", ENV_PREFIX.as_str());
    pub static ref LOG_FILE_NAME: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Where the log file lives: the platform's local data dir, or `./.data`
/// when no home directory can be resolved.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("org", "hackavolt", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".data"))
}

/// Filter directive: `RUST_LOG` wins over the crate's own variable, and
/// the crate logs at `info` when neither is set.
fn filter_directive(rust_log: Option<String>, crate_level: Option<String>) -> String {
    let set = |value: Option<String>| value.filter(|directive| !directive.trim().is_empty());
    set(rust_log)
        .or_else(|| set(crate_level))
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Routes `tracing` output to a file, since the terminal belongs to the UI.
///
/// The file is truncated on every start. Returns its path so it can be
/// reported in the first log event.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = log_directory();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE_NAME.as_str());
    let log_file = File::create(&log_path)?;

    let directive = filter_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_LEVEL_ENV.as_str()).ok(),
    );

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_is_crate_info() {
        assert_eq!(filter_directive(None, None), "hackavolt_recon=info");
        assert_eq!(filter_directive(Some("  ".to_string()), None), "hackavolt_recon=info");
    }

    #[test]
    fn test_rust_log_wins() {
        let directive = filter_directive(Some("debug".to_string()), Some("warn".to_string()));
        assert_eq!(directive, "debug");
        assert_eq!(filter_directive(None, Some("warn".to_string())), "warn");
        assert_eq!(filter_directive(Some(String::new()), Some("warn".to_string())), "warn");
    }

    #[test]
    fn test_log_names() {
        assert_eq!(LOG_LEVEL_ENV.as_str(), "HACKAVOLT_RECON_LOGLEVEL");
        assert_eq!(LOG_FILE_NAME.as_str(), "hackavolt-recon.log");
        assert!(!log_directory().as_os_str().is_empty());
    }
}
