// Create-from-template orchestration: validate, resolve ignores, copy, rewrite

use crate::models::create_options::CreateOptions;
use crate::services::copier::copy_template;
use crate::services::ignore::IgnoreSet;
use crate::services::rewriter::rewrite_project_name;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Create a new project from a template.
///
/// Validates the template directory before any filesystem mutation, copies
/// the tree honoring the resolved ignore set, then rewrites the project name
/// when one was supplied. Steps run strictly in sequence; a failure leaves
/// whatever was already written in place (callers re-copy to recover).
pub fn create_from_template(options: &CreateOptions) -> Result<()> {
    let template_path = to_absolute(&options.template_path)?;
    let target_path = to_absolute(&options.target_path)?;

    let ignore = IgnoreSet::resolve(&template_path, options.skip_git_ignore)?;
    copy_template(&template_path, &target_path, &ignore)?;

    if let Some(project_name) = &options.project_name {
        rewrite_project_name(&target_path, project_name, options.replace_all)?;
    }

    Ok(())
}

fn to_absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::manifest::{Manifest, MANIFEST_FILE};
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn basic_template(template: &Path) {
        write(template, MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(template, "README.md", "old-proj setup");
        write(template, "src/index.js", "require('old-proj');");
    }

    #[test]
    fn test_create_without_replace_all() {
        let template = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        basic_template(template.path());
        let dest = target.path().join("new-proj");

        let options =
            CreateOptions::new(template.path(), &dest).with_project_name("new-proj");
        create_from_template(&options).unwrap();

        let manifest = Manifest::load(dest.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.name(), Some("new-proj"));
        assert_eq!(
            fs::read_to_string(dest.join("README.md")).unwrap(),
            "new-proj setup"
        );
        assert_eq!(
            fs::read_to_string(dest.join("src/index.js")).unwrap(),
            "require('old-proj');"
        );
    }

    #[test]
    fn test_create_with_replace_all() {
        let template = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        basic_template(template.path());
        let dest = target.path().join("new-proj");

        let options = CreateOptions::new(template.path(), &dest)
            .with_project_name("new-proj")
            .with_replace_all(true);
        create_from_template(&options).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("src/index.js")).unwrap(),
            "require('new-proj');"
        );
    }

    #[test]
    fn test_create_without_project_name_copies_only() {
        let template = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        basic_template(template.path());
        let dest = target.path().join("copy");

        let options = CreateOptions::new(template.path(), &dest);
        create_from_template(&options).unwrap();

        let manifest = Manifest::load(dest.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.name(), Some("old-proj"));
    }

    #[test]
    fn test_missing_template_fails_with_nothing_written() {
        let target = TempDir::new().unwrap();
        let dest = target.path().join("out");

        let options = CreateOptions::new(target.path().join("missing"), &dest)
            .with_project_name("new-proj");
        let result = create_from_template(&options);

        assert!(result.is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_gitignore_honored_and_skippable() {
        let template = TempDir::new().unwrap();
        basic_template(template.path());
        write(template.path(), ".gitignore", "*.log\n");
        write(template.path(), "debug.log", "noise");

        let honored = TempDir::new().unwrap();
        let options = CreateOptions::new(template.path(), honored.path().join("a"));
        create_from_template(&options).unwrap();
        assert!(!honored.path().join("a/debug.log").exists());

        let skipped = TempDir::new().unwrap();
        let options = CreateOptions::new(template.path(), skipped.path().join("b"))
            .with_git_ignore(false);
        create_from_template(&options).unwrap();
        assert!(skipped.path().join("b/debug.log").exists());
    }
}
