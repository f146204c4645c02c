// Name rewriter: replace the template's project name across target files

use crate::models::manifest::{Manifest, MANIFEST_FILE};
use crate::services::ignore::IgnoreSet;
use crate::utils::error::Result;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Readme rewritten alongside the manifest
const README_FILE: &str = "README.md";

/// Extensions considered text for the replace-all pass; anything else is
/// never touched
const TEXT_FILE_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "json", "md", "yml", "yaml", "html",
];

/// Rewrite the project name under `target_path`.
///
/// The old name is whatever the manifest's `name` field holds; it is
/// replaced with `new_name` in the manifest, the readme, and - when
/// `replace_all` is set - every other text file in the tree. Returns
/// immediately when there is no manifest or no usable name field: rewriting
/// is simply not applicable.
///
/// Replacement is literal substring replacement; names containing
/// pattern-special characters match only themselves. Any individual
/// read/write failure aborts the whole rewrite with no rollback.
pub fn rewrite_project_name(target_path: &Path, new_name: &str, replace_all: bool) -> Result<()> {
    let manifest_path = target_path.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Ok(());
    }

    let mut manifest = Manifest::load(&manifest_path)?;
    let Some(old_name) = manifest.name().map(str::to_string) else {
        return Ok(());
    };

    manifest.set_name(new_name);
    manifest.save(&manifest_path)?;

    let readme_path = target_path.join(README_FILE);
    if readme_path.exists() {
        replace_in_file(&readme_path, &old_name, new_name)?;
    }

    if !replace_all {
        return Ok(());
    }

    let skip = IgnoreSet::baseline();
    let walker = WalkDir::new(target_path)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            entry
                .path()
                .strip_prefix(target_path)
                .map(|rel| !skip.matches(rel))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(target_path) else {
            continue;
        };

        // The root manifest and readme were already handled above
        if rel == Path::new(MANIFEST_FILE) || rel == Path::new(README_FILE) {
            continue;
        }

        if !is_text_file(entry.path()) {
            continue;
        }

        let content = fs::read_to_string(entry.path())?;
        if content.contains(&old_name) {
            fs::write(entry.path(), content.replace(&old_name, new_name))?;
        }
    }

    Ok(())
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_FILE_EXTENSIONS.contains(&ext))
}

fn replace_in_file(path: &Path, old_name: &str, new_name: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, content.replace(old_name, new_name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_manifest_and_readme_rewritten() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj","version":"1.0.0"}"#);
        write(target.path(), README_FILE, "# old-proj\n\nold-proj setup guide\n");

        rewrite_project_name(target.path(), "new-proj", false).unwrap();

        let manifest = Manifest::load(target.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.name(), Some("new-proj"));

        let readme = read(target.path(), README_FILE);
        assert!(!readme.contains("old-proj"));
        assert!(readme.contains("# new-proj"));
        assert!(readme.contains("new-proj setup guide"));
    }

    #[test]
    fn test_other_files_untouched_without_replace_all() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(target.path(), README_FILE, "old-proj setup");
        write(target.path(), "src/index.js", "console.log('old-proj');");

        rewrite_project_name(target.path(), "new-proj", false).unwrap();

        assert_eq!(read(target.path(), "src/index.js"), "console.log('old-proj');");
    }

    #[test]
    fn test_replace_all_rewrites_text_files() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(target.path(), README_FILE, "old-proj setup");
        write(target.path(), "src/index.js", "console.log('old-proj');");
        write(target.path(), "docs/guide.md", "Run old-proj locally");
        write(target.path(), "config.yaml", "service: old-proj");

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(read(target.path(), "src/index.js"), "console.log('new-proj');");
        assert_eq!(read(target.path(), "docs/guide.md"), "Run new-proj locally");
        assert_eq!(read(target.path(), "config.yaml"), "service: new-proj");
    }

    #[test]
    fn test_replace_all_skips_unlisted_extensions_and_binaries() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(target.path(), "notes.txt", "old-proj notes");
        write(target.path(), "no_extension", "old-proj");

        let mut binary = b"\x00\x01\x02old-proj\x03".to_vec();
        binary.extend_from_slice(&[0xff, 0xfe]);
        fs::write(target.path().join("asset.bin"), &binary).unwrap();

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(read(target.path(), "notes.txt"), "old-proj notes");
        assert_eq!(read(target.path(), "no_extension"), "old-proj");
        assert_eq!(fs::read(target.path().join("asset.bin")).unwrap(), binary);
    }

    #[test]
    fn test_replace_all_skips_baseline_directories() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(
            target.path(),
            "node_modules/old-proj/index.js",
            "module.exports = 'old-proj';",
        );

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(
            read(target.path(), "node_modules/old-proj/index.js"),
            "module.exports = 'old-proj';"
        );
    }

    #[test]
    fn test_nested_manifest_rewritten_in_replace_all() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old-proj"}"#);
        write(
            target.path(),
            "packages/core/package.json",
            r#"{"name":"@old-proj/core"}"#,
        );

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(
            read(target.path(), "packages/core/package.json"),
            r#"{"name":"@new-proj/core"}"#
        );
    }

    #[test]
    fn test_no_manifest_is_a_no_op() {
        let target = TempDir::new().unwrap();
        write(target.path(), README_FILE, "old-proj setup");

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(read(target.path(), README_FILE), "old-proj setup");
    }

    #[test]
    fn test_manifest_without_name_is_a_no_op() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"version":"1.0.0"}"#);
        write(target.path(), README_FILE, "some readme");

        rewrite_project_name(target.path(), "new-proj", true).unwrap();

        assert_eq!(read(target.path(), MANIFEST_FILE), r#"{"version":"1.0.0"}"#);
        assert_eq!(read(target.path(), README_FILE), "some readme");
    }

    #[test]
    fn test_replacement_is_literal_not_pattern() {
        let target = TempDir::new().unwrap();
        write(target.path(), MANIFEST_FILE, r#"{"name":"old.proj"}"#);
        write(target.path(), README_FILE, "old.proj but not oldxproj");

        rewrite_project_name(target.path(), "new-proj", false).unwrap();

        let readme = read(target.path(), README_FILE);
        assert_eq!(readme, "new-proj but not oldxproj");
    }

    #[test]
    fn test_manifest_formatting_stable() {
        let target = TempDir::new().unwrap();
        write(
            target.path(),
            MANIFEST_FILE,
            "{\"name\":\"old-proj\",\"scripts\":{\"dev\":\"vite\"}}",
        );

        rewrite_project_name(target.path(), "new-proj", false).unwrap();

        let content = read(target.path(), MANIFEST_FILE);
        assert_eq!(
            content,
            "{\n  \"name\": \"new-proj\",\n  \"scripts\": {\n    \"dev\": \"vite\"\n  }\n}\n"
        );
    }
}
