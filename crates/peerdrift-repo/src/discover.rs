use crate::WorkspaceError;
use camino::Utf8Path;
use std::collections::BTreeSet;

/// Discover checkable sub-package directories under `<repo_root>/packages`.
///
/// Behavior:
/// - one level deep, no recursion
/// - names in `ignore` are dropped before their manifests are touched
/// - entries without a `package.json` are dropped silently
/// - the result is sorted so scan order is deterministic
///
/// A missing or unlistable `packages` directory is an error; there is no
/// workspace to inspect without it.
pub(crate) fn discover_packages(
    repo_root: &Utf8Path,
    ignore: &BTreeSet<String>,
) -> Result<Vec<String>, WorkspaceError> {
    let packages_dir = repo_root.join("packages");
    let entries = std::fs::read_dir(&packages_dir).map_err(|source| {
        WorkspaceError::ListPackages {
            path: packages_dir.clone(),
            source,
        }
    })?;

    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| WorkspaceError::ListPackages {
            path: packages_dir.clone(),
            source,
        })?;
        // Non-UTF-8 names cannot appear in a manifest path; skip them.
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if ignore.contains(&name) {
            continue;
        }
        if !packages_dir.join(&name).join("package.json").exists() {
            continue;
        }
        out.push(name);
    }

    // Stable order.
    out.sort();

    Ok(out)
}
