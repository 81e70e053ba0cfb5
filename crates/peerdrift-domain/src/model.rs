use peerdrift_types::RepoPath;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct WorkspaceModel {
    pub repo_root: RepoPath,

    /// `devDependencies` from the root manifest; the version-of-record.
    /// Empty when the root manifest declares none.
    pub root_dependencies: BTreeMap<String, String>,

    /// Sub-packages in scan order (ignored and manifest-less directories
    /// are already filtered out).
    pub packages: Vec<PackageModel>,
}

#[derive(Clone, Debug, Default)]
pub struct PackageModel {
    /// Directory name under `packages/`.
    pub name: String,
    pub manifest: RepoPath,
    /// `peerDependencies` in manifest document order. Empty when the
    /// package declares none.
    pub peer_dependencies: Vec<PeerDependencyDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerDependencyDecl {
    pub name: String,
    pub version: String,
}

impl WorkspaceModel {
    pub fn peer_dependency_count(&self) -> u32 {
        self.packages
            .iter()
            .map(|p| p.peer_dependencies.len() as u32)
            .sum()
    }
}
