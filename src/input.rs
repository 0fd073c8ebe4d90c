//! Loading schema content from disk.

use crate::common::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Input formats accepted by [`load_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Format implied by the file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse schema content from text.
pub fn parse_content(text: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(text)?),
        InputFormat::Yaml => {
            serde_saphyr::from_str(text).map_err(|e| Error::InvalidSchema(e.to_string()))
        },
    }
}

/// Read and parse a schema file, picking the format from its extension.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    log::debug!("loaded {} bytes from {}", text.len(), path.display());
    parse_content(&text, InputFormat::from_path(path))
}
