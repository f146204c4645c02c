// Template discovery across an ordered list of search roots

use crate::models::manifest::{Manifest, MANIFEST_FILE};
use crate::models::template::Template;
use crate::utils::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable holding extra template directories, separated per
/// the platform path-list convention
pub const TEMPLATE_ENV_VAR: &str = "TMPL_TEMPLATE_DIR";

/// Per-user template directory, relative to the home directory
const USER_TEMPLATE_SUBDIR: &str = ".tmpl/templates";

/// Local template directory, relative to the working directory
const LOCAL_TEMPLATE_DIR: &str = "templates";

/// Locates templates across an ordered list of search roots.
///
/// The list is built once at construction from its sources (built-in,
/// per-user, local, environment, caller-supplied) with order preserved and
/// duplicates dropped; it never changes afterwards.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    search_dirs: Vec<PathBuf>,
}

impl TemplateLocator {
    /// Build a locator over the default search roots
    pub fn new() -> Self {
        Self::with_extra_dirs(&[])
    }

    /// Build a locator over the default search roots plus caller-supplied
    /// directories (appended last)
    pub fn with_extra_dirs(extra: &[PathBuf]) -> Self {
        let mut dirs = Vec::new();

        // Built-in templates bundled next to the executable
        if let Some(builtin) = builtin_templates_dir() {
            push_unique(&mut dirs, builtin);
        }

        // Per-user templates
        if let Some(home) = dirs::home_dir() {
            push_unique(&mut dirs, home.join(USER_TEMPLATE_SUBDIR));
        }

        // Local project templates
        if let Ok(cwd) = std::env::current_dir() {
            push_unique(&mut dirs, cwd.join(LOCAL_TEMPLATE_DIR));
        }

        // Environment-configured templates
        if let Some(env_dirs) = std::env::var_os(TEMPLATE_ENV_VAR) {
            for dir in std::env::split_paths(&env_dirs) {
                if !dir.as_os_str().is_empty() {
                    push_unique(&mut dirs, dir);
                }
            }
        }

        for dir in extra {
            push_unique(&mut dirs, dir.clone());
        }

        Self { search_dirs: dirs }
    }

    /// The resolved search roots, in priority order
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// List every template under the search roots that exist on disk.
    ///
    /// Each immediate subdirectory of a root is one template; its
    /// description comes from the subdirectory's manifest when present.
    /// Roots missing from disk are silently skipped.
    pub fn list_templates(&self) -> Result<Vec<Template>> {
        let cwd = std::env::current_dir()?;
        let mut templates = Vec::new();

        for dir in &self.search_dirs {
            if !dir.is_dir() {
                continue;
            }

            let source = source_label(dir, &cwd);

            let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
            entries.sort_by_key(fs::DirEntry::file_name);

            for entry in entries {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }

                let manifest_path = path.join(MANIFEST_FILE);
                let description = if manifest_path.exists() {
                    Manifest::load(&manifest_path)?
                        .description()
                        .map(str::to_string)
                } else {
                    None
                };

                templates.push(Template {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    description,
                    source: source.clone(),
                });
            }
        }

        Ok(templates)
    }
}

impl Default for TemplateLocator {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(dirs: &mut Vec<PathBuf>, dir: PathBuf) {
    if !dirs.contains(&dir) {
        dirs.push(dir);
    }
}

/// The `templates` directory shipped next to the running executable
fn builtin_templates_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(LOCAL_TEMPLATE_DIR)))
}

/// Render a search root relative to the working directory for display,
/// falling back to the absolute path
fn source_label(dir: &Path, cwd: &Path) -> String {
    dir.strip_prefix(cwd)
        .map(|rel| rel.display().to_string())
        .unwrap_or_else(|_| dir.display().to_string())
}
