// Manifest (package.json) loading, inspection, and rewriting

use crate::utils::error::{Result, TmplError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// File name of the project manifest at a template or project root
pub const MANIFEST_FILE: &str = "package.json";

/// A project manifest.
///
/// The manifest is kept as a raw JSON object so that fields this tool does
/// not understand survive a load/save round-trip. With `serde_json`'s
/// `preserve_order` feature the key order survives as well.
#[derive(Debug, Clone)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            TmplError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
            .map_err(|e| TmplError::Config(format!("Invalid manifest {}: {}", path.display(), e)))
    }

    /// Parse a manifest from a JSON string
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

        match value {
            Value::Object(document) => Ok(Self { document }),
            _ => Err("top-level value must be a JSON object".to_string()),
        }
    }

    /// Project name, when the manifest carries a non-empty `name` field
    pub fn name(&self) -> Option<&str> {
        self.document
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Project description, when the manifest carries a non-empty
    /// `description` field
    pub fn description(&self) -> Option<&str> {
        self.document
            .get("description")
            .and_then(Value::as_str)
            .filter(|description| !description.is_empty())
    }

    /// Overwrite the `name` field
    pub fn set_name(&mut self, name: &str) {
        self.document
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Render the manifest with stable 2-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.document)?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write the manifest back to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let rendered = self.to_pretty_string()?;

        fs::write(path, rendered).map_err(|e| {
            TmplError::Config(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
