// Tree copier: reproduce a template's file tree under a target directory

use crate::services::ignore::IgnoreSet;
use crate::utils::error::Result;
use crate::utils::validation::validate_template_path;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Copy every entry under `template_path` not excluded by `ignore` to the
/// corresponding path under `target_path`.
///
/// Directories are created as needed (including intermediates), file bytes
/// are copied verbatim, and existing files at the target are overwritten
/// without warning. Excluded directories are pruned, so their contents are
/// never visited.
pub fn copy_template(template_path: &Path, target_path: &Path, ignore: &IgnoreSet) -> Result<()> {
    validate_template_path(template_path)?;

    fs::create_dir_all(target_path)?;

    let walker = WalkDir::new(template_path)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            entry
                .path()
                .strip_prefix(template_path)
                .map(|rel| !ignore.matches(rel))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let Ok(rel) = entry.path().strip_prefix(template_path) else {
            continue;
        };
        let dest = target_path.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}
