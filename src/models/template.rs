use serde::Serialize;
use std::path::PathBuf;

/// A template discovered under one of the search roots.
///
/// Built transiently on every listing; nothing about a template is persisted
/// between invocations.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    /// Template name (the subdirectory name under its search root)
    pub name: String,
    /// Absolute path of the template directory
    pub path: PathBuf,
    /// Description from the template's manifest, when present
    pub description: Option<String>,
    /// Search root rendered relative to the working directory, for display
    pub source: String,
}

impl Template {
    /// One-line label used in listings and selection prompts
    pub fn display_label(&self) -> String {
        match &self.description {
            Some(description) => format!("{} (from {}) - {}", self.name, self.source, description),
            None => format!("{} (from {})", self.name, self.source),
        }
    }
}
