//! Repository adapters: discover sub-packages, read and parse JSON manifests.
//!
//! This crate is the only one allowed to do filesystem IO. Failure paths are
//! typed (`WorkspaceError`) so callers see them in signatures instead of
//! relying on unwinding.

#![forbid(unsafe_code)]

mod discover;
mod manifest;

use camino::{Utf8Path, Utf8PathBuf};
use peerdrift_domain::model::{PackageModel, WorkspaceModel};
use peerdrift_types::RepoPath;
use std::collections::BTreeSet;
use thiserror::Error;

pub use manifest::ManifestError;

/// Fatal conditions that abort a scan. Findings are not errors and never
/// appear here.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The root manifest is missing, unreadable, or unparsable. The scan
    /// aborts before any sub-package is inspected.
    #[error("cannot read devDependencies from root package.json")]
    RootManifest(#[source] ManifestError),

    /// The `packages` directory cannot be listed.
    #[error("cannot list packages directory {path}")]
    ListPackages {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered sub-package manifest exists but fails to read or parse.
    /// Fatal for the whole run; never downgraded to a finding.
    #[error("cannot process {path}")]
    Package {
        path: RepoPath,
        #[source]
        source: ManifestError,
    },
}

/// Build the in-memory workspace model used by the drift engine.
///
/// `repo_root` is the directory containing the root `package.json` and the
/// `packages` directory. Names in `ignore` are excluded from discovery
/// before their manifests are opened, so a malformed ignored package cannot
/// abort the run.
pub fn build_workspace_model(
    repo_root: &Utf8Path,
    ignore: &BTreeSet<String>,
) -> Result<WorkspaceModel, WorkspaceError> {
    let root_manifest = repo_root.join("package.json");
    let root_doc = manifest::read_manifest(&root_manifest).map_err(WorkspaceError::RootManifest)?;
    let root_dependencies = manifest::dev_dependencies(&root_doc);

    let package_dirs = discover::discover_packages(repo_root, ignore)?;

    let mut packages = Vec::with_capacity(package_dirs.len());
    for name in package_dirs {
        let rel = RepoPath::new("packages").join(&name).join("package.json");
        let abs = repo_root.join(rel.as_str());
        let doc = manifest::read_manifest(&abs).map_err(|source| WorkspaceError::Package {
            path: rel.clone(),
            source,
        })?;
        packages.push(PackageModel {
            name,
            manifest: rel,
            peer_dependencies: manifest::peer_dependencies(&doc),
        });
    }

    Ok(WorkspaceModel {
        repo_root: RepoPath::from(repo_root),
        root_dependencies,
        packages,
    })
}
