// Common validation utilities for tmpl CLI commands

use crate::utils::error::{Result, TmplError};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Allowed project-name characters: lowercase letters, digits, hyphens,
/// underscores.
fn project_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[a-z0-9_-]+$").expect("project name pattern is valid"))
}

/// Validate a project name for use as a directory name and substitution target
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TmplError::Validation(
            "Project name is required.\n\nExample:\n  tmpl create --template basic-cli --name my-app".to_string()
        ));
    }

    if !project_name_pattern().is_match(name) {
        return Err(TmplError::Validation(format!(
            "Invalid project name '{}' - can only contain lowercase letters, numbers, hyphens, and underscores.\n\nValid project names:\n  ✓ my-app\n  ✓ my_app2\n  ✗ My App",
            name
        )));
    }

    Ok(())
}

/// Validate that a template path exists and is a readable directory
pub fn validate_template_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TmplError::Config(format!(
            "Template path does not exist: {}",
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(TmplError::Config(format!(
            "Template path is not a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
