//! Target discovery: which directories get audited

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Dependency manifest expected directly inside an auditable directory
pub const MANIFEST_FILE: &str = "package.json";
/// Lockfile expected directly inside an auditable directory
pub const LOCKFILE_FILE: &str = "package-lock.json";
/// Installed-dependencies directory expected directly inside an auditable directory
pub const INSTALLED_DEPS_DIR: &str = "node_modules";

/// The two paths audited ahead of the recursive scan, in order: the
/// grandparent of the root (when it has one) and the root itself. These are
/// audited regardless of the exclusion list.
pub fn fixed_targets(root: &Path) -> Vec<PathBuf> {
    let mut targets = Vec::with_capacity(2);
    if let Some(grandparent) = root.parent().and_then(Path::parent) {
        targets.push(grandparent.to_path_buf());
    }
    targets.push(root.to_path_buf());
    targets
}

/// Lazily walk the directories under `root`, pruning any subtree whose path
/// starts with one of `exclude` (excluded directories' children are never
/// visited). The root itself is not yielded; it is covered by
/// [`fixed_targets`].
pub fn scan_targets<'a>(
    root: &Path,
    exclude: &'a [PathBuf],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(move |entry| {
            let keep = !is_excluded(entry.path(), exclude);
            if !keep {
                debug!("pruning excluded subtree: {}", entry.path().display());
            }
            keep
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
}

/// Whether `path` falls under any exclusion prefix
fn is_excluded(path: &Path, exclude: &[PathBuf]) -> bool {
    exclude.iter().any(|prefix| path.starts_with(prefix))
}

/// Whether a directory is auditable: manifest, lockfile and installed-deps
/// directory all present directly inside it. Pure existence check, no reads.
pub fn is_auditable(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file()
        && dir.join(LOCKFILE_FILE).is_file()
        && dir.join(INSTALLED_DEPS_DIR).is_dir()
}
