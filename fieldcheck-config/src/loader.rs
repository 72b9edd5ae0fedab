// Constants file loaders

use crate::{ConfigError, Limits, PatternSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported constants file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// On-disk shape of a constants file. Both sections are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsFile {
    pub patterns: PatternSource,
    pub limits: Limits,
}

/// Constants file loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    /// Load constants from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ConstantsFile> {
        typed(self.load_value(path)?)
    }

    /// Load a file as an untyped tree, keeping only the keys it spells out
    pub fn load_value(&self, path: impl AsRef<Path>) -> Result<Value> {
        let content = fs::read_to_string(path.as_ref())?;
        self.parse_value(&content)
    }

    /// Parse constants from string
    pub fn parse(&self, content: &str) -> Result<ConstantsFile> {
        typed(self.parse_value(content)?)
    }

    /// Parse a string into an untyped tree
    pub fn parse_value(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e))),
            FileFormat::Toml => {
                let table: toml::Table = toml::from_str(content)
                    .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
                serde_json::to_value(table)
                    .map_err(|e| ConfigError::ParseError(format!("TOML conversion error: {}", e)))
            }
        }
    }
}

/// Type a merged tree; anything it leaves out keeps the built-in default,
/// down to a single side of a [`Bounds`](crate::Bounds).
pub fn typed(value: Value) -> Result<ConstantsFile> {
    let mut base = serde_json::to_value(ConstantsFile::default())
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    merge_values(&mut base, value);
    serde_json::from_value(base).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Overlay `over` onto `base`. Tables merge key by key, anything else replaces.
pub fn merge_values(base: &mut Value, over: Value) {
    match (base, over) {
        (Value::Object(base), Value::Object(over)) => {
            for (key, value) in over {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, over) => *base = over,
    }
}
