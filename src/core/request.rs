// src/core/request.rs

use crate::core::error::RequestError;
use crate::core::models::TargetRequest;
use tracing::debug;

/// Example text pre-filled in the target field. Never a real target.
pub const HOST_PLACEHOLDER: &str = "https://example.com";

/// Example text pre-filled in the port field.
pub const PORT_PLACEHOLDER: &str = "443";

/// Port used when the port field is left empty or untouched.
pub const FALLBACK_PORT: u16 = 80;

/// Validates the raw target fields and builds a `TargetRequest`.
///
/// A missing host is rejected; a missing port falls back to
/// `FALLBACK_PORT`. Placeholder text counts as missing.
///
/// # Arguments
/// * `raw_host` - The target field as typed, URL or hostname.
/// * `raw_port` - The port field as typed.
pub fn build(raw_host: &str, raw_port: &str) -> Result<TargetRequest, RequestError> {
    let host = raw_host.trim();
    let port = raw_port.trim();

    if host.is_empty() || host == HOST_PLACEHOLDER {
        debug!(host, "Rejected target: missing host.");
        return Err(RequestError::MissingHost);
    }

    let port = if port.is_empty() || port == PORT_PLACEHOLDER {
        FALLBACK_PORT
    } else {
        match port.parse::<u32>() {
            Ok(p @ 1..=65535) => p as u16,
            _ => {
                debug!(port, "Rejected target: invalid port.");
                return Err(RequestError::InvalidPort);
            }
        }
    };

    Ok(TargetRequest { host: host.to_string(), port })
}
