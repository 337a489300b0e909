//! Legislator roster loading.

use std::fs;

use crate::legislators::types::Legislator;

/// Load the legislator roster from a YAML document.
///
/// Read or parse failures are logged and produce an empty roster so the
/// service stays up and answers "not found" instead of crashing.
#[must_use]
pub fn load_legislators(path: &str) -> Vec<Legislator> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path, error = %err, "failed to read legislator roster, continuing with empty roster");
            return Vec::new();
        }
    };

    match serde_yaml::from_str::<Vec<Legislator>>(&raw) {
        Ok(legislators) => {
            tracing::info!(path, count = legislators.len(), "loaded legislator roster");
            legislators
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "failed to parse legislator roster, continuing with empty roster");
            Vec::new()
        }
    }
}
