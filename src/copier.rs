//! Recursive copy of the source tree into the migration target.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Summary of a completed copy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
}

/// Copies everything below `from` into `to`.
///
/// Existing files in `to` are overwritten, other entries in `to` are kept.
/// Symbolic links are recreated, not followed. `to` must not lie inside
/// `from`, whether or not it exists yet.
pub fn copy_tree(from: &Path, to: &Path) -> Result<CopyStats> {
    info!("Copying {} to {}", from.display(), to.display());

    let from_canonical = from
        .canonicalize()
        .with_context(|| format!("Failed to resolve source: {}", from.display()))?;
    let to_resolved = resolve_target(to)?;
    if to_resolved.starts_with(&from_canonical) {
        anyhow::bail!(
            "Target {} lies inside source {}",
            to.display(),
            from.display()
        );
    }

    let mut stats = CopyStats::default();
    for entry in WalkDir::new(from) {
        let entry = entry.with_context(|| format!("Failed to read {}", from.display()))?;
        let relative = entry.path().strip_prefix(from).with_context(|| {
            format!("Unexpected entry outside source: {}", entry.path().display())
        })?;
        let destination = to.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&destination).with_context(|| {
                format!("Failed to create directory: {}", destination.display())
            })?;
            stats.directories += 1;
        } else if file_type.is_symlink() {
            if copy_symlink(entry.path(), &destination)? {
                stats.symlinks += 1;
            }
        } else {
            debug!("Copying {}", relative.display());
            fs::copy(entry.path(), &destination)
                .with_context(|| format!("Failed to copy to {}", destination.display()))?;
            stats.files += 1;
        }
    }

    info!(
        "Copied {} files and {} links in {} directories",
        stats.files, stats.symlinks, stats.directories
    );
    Ok(stats)
}

/// Resolves `path` to an absolute path without requiring it to exist.
///
/// `.` and `..` are removed lexically, then the deepest existing ancestor is
/// canonicalized and the missing tail is appended to it.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }

    let mut missing = Vec::new();
    let mut existing = normalized.as_path();
    loop {
        if let Ok(resolved) = existing.canonicalize() {
            return Ok(missing.iter().rev().fold(resolved, |acc, name| acc.join(name)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return Ok(normalized.clone()),
        }
    }
}

/// Recreates the link at `source` as `destination`; returns false when the
/// platform cannot and the link is skipped.
#[cfg(unix)]
fn copy_symlink(source: &Path, destination: &Path) -> Result<bool> {
    let target = fs::read_link(source)
        .with_context(|| format!("Failed to read link: {}", source.display()))?;
    if fs::symlink_metadata(destination).is_ok() {
        fs::remove_file(destination)
            .with_context(|| format!("Failed to replace {}", destination.display()))?;
    }
    debug!("Linking {} -> {}", destination.display(), target.display());
    std::os::unix::fs::symlink(&target, destination)
        .with_context(|| format!("Failed to create link: {}", destination.display()))?;
    Ok(true)
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, _destination: &Path) -> Result<bool> {
    debug!("Skipping symbolic link {}", source.display());
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_tree_copies_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        let to = temp_dir.path().join("vite/src");
        fs::create_dir_all(from.join("app/blog")).unwrap();
        fs::write(from.join("app/blog/page.tsx"), "export default 1").unwrap();
        fs::write(from.join("app/layout.tsx"), "layout").unwrap();

        let stats = copy_tree(&from, &to).unwrap();

        assert_eq!(stats.files, 2);
        // src, app, app/blog
        assert_eq!(stats.directories, 3);
        assert_eq!(
            fs::read_to_string(to.join("app/blog/page.tsx")).unwrap(),
            "export default 1"
        );
        assert!(to.join("app/layout.tsx").is_file());
    }

    #[test]
    fn test_copy_tree_merges_into_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        let to = temp_dir.path().join("out");
        fs::create_dir_all(&from).unwrap();
        fs::create_dir_all(&to).unwrap();
        fs::write(from.join("a.ts"), "new").unwrap();
        fs::write(to.join("a.ts"), "old").unwrap();
        fs::write(to.join("keep.ts"), "keep").unwrap();

        copy_tree(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(to.join("a.ts")).unwrap(), "new");
        assert_eq!(fs::read_to_string(to.join("keep.ts")).unwrap(), "keep");
    }

    #[test]
    fn test_copy_tree_rejects_target_inside_source() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        let to = from.join("nested");
        fs::create_dir_all(&to).unwrap();

        assert!(copy_tree(&from, &to).is_err());
    }

    #[test]
    fn test_copy_tree_rejects_missing_target_inside_source() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        fs::create_dir_all(from.join("app/blog")).unwrap();
        fs::write(from.join("app/blog/page.tsx"), "").unwrap();
        let to = from.join("out");

        assert!(copy_tree(&from, &to).is_err());
        assert!(!to.exists());
    }

    #[test]
    fn test_copy_tree_rejects_relative_dotted_target_inside_source() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        fs::create_dir_all(&from).unwrap();
        let to = temp_dir.path().join("elsewhere/../src/deep/out");

        assert!(copy_tree(&from, &to).is_err());
        assert!(!from.join("deep").exists());
    }

    #[test]
    fn test_resolve_target_keeps_missing_tail() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().canonicalize().unwrap();

        let resolved = resolve_target(&temp_dir.path().join("a/b/../c")).unwrap();

        assert_eq!(resolved, base.join("a/c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_recreates_directory_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("src");
        let to = temp_dir.path().join("out");
        fs::create_dir_all(from.join("app/shared")).unwrap();
        fs::write(from.join("app/shared/page.tsx"), "").unwrap();
        std::os::unix::fs::symlink("shared", from.join("app/alias")).unwrap();

        let stats = copy_tree(&from, &to).unwrap();

        assert_eq!(stats.symlinks, 1);
        assert_eq!(stats.files, 1);
        let link = to.join("app/alias");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&link).unwrap(), PathBuf::from("shared"));
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = copy_tree(&temp_dir.path().join("missing"), &temp_dir.path().join("out"));
        assert!(result.is_err());
    }
}
