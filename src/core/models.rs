// src/core/models.rs

use serde_json::Value;
use std::fmt;
use std::time::Duration;

// --- Catalog Models ---

/// A property value as it appears under a tool definition.
///
/// Scalars keep their JSON text (strings verbatim, everything else in its
/// JSON form). Objects and arrays become `Nested`, arrays keyed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Scalar(String),
    Nested(Vec<(String, PropertyValue)>),
}

#[cfg(test)]
impl PropertyValue {
    /// Returns the scalar text, or `None` for nested values.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::Nested(_) => None,
        }
    }

    /// Looks up a direct child of a nested value by key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::Nested(children) => {
                children.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => PropertyValue::Scalar(s),
            Value::Object(map) => {
                PropertyValue::Nested(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(items) => PropertyValue::Nested(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v.into()))
                    .collect(),
            ),
            other => PropertyValue::Scalar(other.to_string()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(s) => write!(f, "{}", s),
            PropertyValue::Nested(children) => write!(f, "{{{} keys}}", children.len()),
        }
    }
}

/// One top-level tool from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: String,
    /// Properties in document order.
    pub properties: Vec<(String, PropertyValue)>,
}

#[cfg(test)]
impl ToolEntry {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(k, _)| k.as_str())
    }
}

// --- Dispatch Models ---

/// A validated scan target. Built per submit and handed off by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRequest {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for TargetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Correlates an accepted dispatch with its completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchId(pub u64);

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The immediate result of handing a request to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The engine call was issued on a worker.
    Accepted(DispatchId),
    /// Nothing crossed the engine boundary.
    Rejected(String),
}

/// Delivered to the UI loop once a worker finishes an engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Completed {
        id: DispatchId,
        host: String,
        port: u16,
        elapsed: Duration,
    },
    Failed {
        id: DispatchId,
        reason: String,
    },
}

impl DispatchEvent {
    pub fn id(&self) -> DispatchId {
        match self {
            DispatchEvent::Completed { id, .. } | DispatchEvent::Failed { id, .. } => *id,
        }
    }
}
