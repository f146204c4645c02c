// Ignore-pattern resolution: fixed skip list plus the template's .gitignore

use crate::utils::error::{Result, TmplError};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Ignore file read from the template root
pub const IGNORE_FILE: &str = ".gitignore";

/// Directories never copied or scanned: dependencies, build output, VCS
const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "dist", ".git"];

/// An exclusion set for tree traversal.
///
/// Patterns are matched against template-relative paths. Duplicates are
/// dropped on insert; order has no effect on the outcome.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// The baseline exclusion set, with no template-specific additions
    pub fn baseline() -> Self {
        let mut set = Self {
            patterns: Vec::new(),
        };
        for dir in DEFAULT_SKIP_DIRS {
            // Baseline names contain no glob metacharacters, so they always
            // compile.
            let _ = set.add_line(&format!("{dir}/"));
        }
        set
    }

    /// Resolve the exclusion set for a template: the baseline, plus the
    /// template's ignore file when `use_ignore_file` is set and the file
    /// exists.
    pub fn resolve(template_root: &Path, use_ignore_file: bool) -> Result<Self> {
        let mut set = Self::baseline();

        if use_ignore_file {
            let ignore_path = template_root.join(IGNORE_FILE);
            if ignore_path.exists() {
                let content = fs::read_to_string(&ignore_path)?;
                for line in content.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    set.add_line(line)?;
                }
            }
        }

        Ok(set)
    }

    /// Add one ignore-file line, normalized to glob form
    fn add_line(&mut self, line: &str) -> Result<()> {
        for glob in normalize_ignore_line(line) {
            let pattern = Pattern::new(&glob).map_err(|e| {
                TmplError::Validation(format!("Invalid ignore pattern '{}': {}", line, e))
            })?;
            if !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
        Ok(())
    }

    /// Whether a template-relative path is excluded
    pub fn matches(&self, rel_path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path(rel_path))
    }
}

/// Convert one gitignore line into glob patterns.
///
/// Leading slashes are stripped (anchors are treated as plain names). A
/// trailing slash marks a directory: the directory itself and everything
/// under it are excluded at any depth. Bare names with no wildcard match at
/// any depth. Every pattern is emitted both anchored and `**/`-prefixed so
/// matching never depends on depth.
fn normalize_ignore_line(line: &str) -> Vec<String> {
    let mut pattern = line.trim().to_string();

    if let Some(stripped) = pattern.strip_prefix('/') {
        pattern = stripped.to_string();
    }

    if let Some(dir) = pattern.strip_suffix('/') {
        return vec![
            dir.to_string(),
            format!("{dir}/**"),
            format!("**/{dir}"),
            format!("**/{dir}/**"),
        ];
    }

    vec![pattern.clone(), format!("**/{pattern}")]
}
