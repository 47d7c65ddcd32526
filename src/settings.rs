// src/settings.rs

use crate::logging::ENV_PREFIX;
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    pub static ref CONFIG_ENV: String = format!("{}_CONFIG", ENV_PREFIX.as_str());
    pub static ref ENGINE_ENV: String = format!("{}_ENGINE", ENV_PREFIX.as_str());
}

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_ENGINE_PATH: &str = "./main.so";

/// Where the shell finds its inputs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub engine_path: PathBuf,
}

impl Settings {
    /// Reads the paths from the environment, falling back to the defaults
    /// relative to the working directory.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(CONFIG_ENV.as_str()).ok(),
            std::env::var(ENGINE_ENV.as_str()).ok(),
        )
    }

    fn resolve(config: Option<String>, engine: Option<String>) -> Self {
        let pick = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            config_path: pick(config, DEFAULT_CONFIG_PATH),
            engine_path: pick(engine, DEFAULT_ENGINE_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, None);
        assert_eq!(settings.config_path, PathBuf::from("config.json"));
        assert_eq!(settings.engine_path, PathBuf::from("./main.so"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let settings = Settings::resolve(Some("/etc/recon/tools.json".into()), Some("  ".into()));
        assert_eq!(settings.config_path, PathBuf::from("/etc/recon/tools.json"));
        assert_eq!(settings.engine_path, PathBuf::from(DEFAULT_ENGINE_PATH));
    }

    #[test]
    fn test_env_names() {
        assert_eq!(CONFIG_ENV.as_str(), "HACKAVOLT_RECON_CONFIG");
        assert_eq!(ENGINE_ENV.as_str(), "HACKAVOLT_RECON_ENGINE");
    }
}
