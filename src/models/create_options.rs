use std::path::{Path, PathBuf};

/// Options for a single create-from-template operation.
///
/// Fully specified by the caller before invocation and immutable for the
/// duration of the operation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Template directory to copy from
    pub template_path: PathBuf,
    /// Directory to create the project in (need not pre-exist)
    pub target_path: PathBuf,
    /// Whether to honor the template's .gitignore when copying
    pub skip_git_ignore: bool,
    /// New project name; when set, occurrences of the template's own name
    /// are rewritten after the copy
    pub project_name: Option<String>,
    /// Whether to rewrite the project name across the whole tree instead of
    /// only the manifest and readme
    pub replace_all: bool,
}

impl CreateOptions {
    pub fn new<T: AsRef<Path>, U: AsRef<Path>>(template_path: T, target_path: U) -> Self {
        Self {
            template_path: template_path.as_ref().to_path_buf(),
            target_path: target_path.as_ref().to_path_buf(),
            skip_git_ignore: true,
            project_name: None,
            replace_all: false,
        }
    }

    pub fn with_project_name(mut self, name: &str) -> Self {
        self.project_name = Some(name.to_string());
        self
    }

    pub fn with_replace_all(mut self, replace_all: bool) -> Self {
        self.replace_all = replace_all;
        self
    }

    pub fn with_git_ignore(mut self, honor: bool) -> Self {
        self.skip_git_ignore = honor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CreateOptions::new("/templates/basic", "/projects/new");
        assert!(options.skip_git_ignore);
        assert!(options.project_name.is_none());
        assert!(!options.replace_all);
    }

    #[test]
    fn test_builder_methods() {
        let options = CreateOptions::new("/templates/basic", "/projects/new")
            .with_project_name("my-app")
            .with_replace_all(true)
            .with_git_ignore(false);

        assert_eq!(options.project_name.as_deref(), Some("my-app"));
        assert!(options.replace_all);
        assert!(!options.skip_git_ignore);
    }
}
