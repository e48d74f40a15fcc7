// src/props/export.rs
//! RON serialization of a finished `PlacementSet`, keyed by snake_case prop type names.

use std::path::Path;

use ron::ser::PrettyConfig;

use super::core::PlacementSet;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("I/O while writing placements: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON serialize error: {0}")]
    Ron(String),
}

pub fn to_ron_string(set: &PlacementSet) -> Result<String, ExportError> {
    let pretty = PrettyConfig::new().depth_limit(3).indentor("  ".to_string());
    ron::ser::to_string_pretty(set, pretty).map_err(|e| ExportError::Ron(e.to_string()))
}

pub fn from_ron_str(text: &str) -> Result<PlacementSet, ExportError> {
    ron::de::from_str(text).map_err(|e| ExportError::Ron(e.to_string()))
}

/// Serialize `set` to `path`, replacing any existing file.
pub fn write_ron(path: impl AsRef<Path>, set: &PlacementSet) -> Result<(), ExportError> {
    let text = to_ron_string(set)?;
    std::fs::write(path, text)?;
    Ok(())
}
