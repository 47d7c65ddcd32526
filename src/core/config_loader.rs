// src/core/config_loader.rs

use crate::core::catalog::Catalog;
use crate::core::error::ConfigError;
use crate::core::models::ToolEntry;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// The root key holding the tool definitions.
pub const TOOLS_KEY: &str = "tools";

/// Loads the tool catalog from a JSON configuration file.
///
/// The document must be an object with a `tools` object mapping each tool
/// name to its definition. Every first-level key of a definition becomes a
/// property; nested shapes are kept as opaque `PropertyValue::Nested` trees.
///
/// # Arguments
/// * `path` - Location of the configuration file, usually `config.json`.
///
/// # Returns
/// The `Catalog` in document order, or a `ConfigError` describing why the
/// file could not be turned into one.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading configuration file.");

    // Raw bytes, so a document that is not UTF-8 is a parse error rather than I/O.
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    let catalog = load_slice(&bytes)?;
    info!(path = %path.display(), tools = catalog.len(), "Configuration loaded.");
    Ok(catalog)
}

/// Parses an in-memory configuration document.
#[cfg(test)]
pub fn load_str(text: &str) -> Result<Catalog, ConfigError> {
    load_slice(text.as_bytes())
}

/// Parses a configuration document from raw bytes.
pub fn load_slice(bytes: &[u8]) -> Result<Catalog, ConfigError> {
    let document: Value = serde_json::from_slice(bytes)?;

    let Value::Object(mut root) = document else {
        return Err(ConfigError::Schema("root is not an object".to_string()));
    };
    let tools = root
        .remove(TOOLS_KEY)
        .ok_or_else(|| ConfigError::Schema(format!("missing key `{}`", TOOLS_KEY)))?;
    let Value::Object(tools) = tools else {
        return Err(ConfigError::Schema(format!("`{}` is not an object", TOOLS_KEY)));
    };

    let mut entries = Vec::with_capacity(tools.len());
    for (name, definition) in tools {
        let Value::Object(definition) = definition else {
            return Err(ConfigError::Schema(format!(
                "tool `{}` is not an object",
                name
            )));
        };
        debug!(tool = %name, properties = definition.len(), "Loaded tool definition.");
        entries.push(ToolEntry {
            name,
            properties: definition.into_iter().map(|(k, v)| (k, v.into())).collect(),
        });
    }

    Ok(Catalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PropertyValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CONFIG: &str = r#"{
        "tools": {
            "nmap": {
                "description": "Network mapper",
                "flags": "-sV",
                "timing": 4,
                "scripts": ["default", "vuln"]
            },
            "whois": {
                "server": "whois.iana.org"
            },
            "dirb": {
                "wordlist": { "path": "/usr/share/dirb/common.txt", "extensions": [".php"] },
                "recursive": false
            }
        }
    }"#;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_tool_order() {
        let file = write_config(SAMPLE_CONFIG);
        let catalog = load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["nmap", "whois", "dirb"]);
    }

    #[test]
    fn test_load_preserves_property_order() {
        let catalog = load_str(SAMPLE_CONFIG).unwrap();
        let nmap = catalog.entry("nmap").unwrap();
        assert_eq!(
            nmap.property_names().collect::<Vec<_>>(),
            vec!["description", "flags", "timing", "scripts"]
        );
        assert_eq!(
            nmap.property("timing"),
            Some(&PropertyValue::Scalar("4".to_string()))
        );
    }

    #[test]
    fn test_reverse_alphabetical_order_is_not_sorted() {
        let catalog = load_str(r#"{"tools": {"zmap": {}, "nmap": {}, "amass": {}}}"#).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["zmap", "nmap", "amass"]);
    }

    #[test]
    fn test_nested_values_are_opaque() {
        let catalog = load_str(SAMPLE_CONFIG).unwrap();
        let dirb = catalog.entry("dirb").unwrap();
        let wordlist = dirb.property("wordlist").unwrap();
        assert!(matches!(wordlist, PropertyValue::Nested(_)));
        assert_eq!(
            wordlist.get("extensions").and_then(|v| v.get("0")).and_then(|v| v.as_scalar()),
            Some(".php")
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(matches!(load(&path), Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        for text in ["", "{", r#"{"tools": {"nmap": }"#, "tools: []", r#"{"tools": {}} trailing"#] {
            assert!(
                matches!(load_str(text), Err(ConfigError::Parse(_))),
                "expected parse error for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("{ not json");
        assert!(matches!(load(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"tools\":{\"nmap\":{\"flags\":\"").unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();
        file.write_all(b"\"}}}").unwrap();
        assert!(matches!(load(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path()), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_missing_tools_key_is_schema_error() {
        match load_str(r#"{"tool": {}}"#) {
            Err(ConfigError::Schema(msg)) => assert!(msg.contains("tools")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shapes_are_schema_errors() {
        assert!(matches!(load_str("[]"), Err(ConfigError::Schema(_))));
        assert!(matches!(load_str(r#"{"tools": []}"#), Err(ConfigError::Schema(_))));
        match load_str(r#"{"tools": {"nmap": "fast"}}"#) {
            Err(ConfigError::Schema(msg)) => assert!(msg.contains("nmap")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tools_gives_empty_catalog() {
        let catalog = load_str(r#"{"tools": {}}"#).unwrap();
        assert!(catalog.is_empty());
    }
}
