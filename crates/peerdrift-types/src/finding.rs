use crate::RepoPath;

/// The two ways a sub-package can disagree with the root manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// The peer dependency has no entry in the root `devDependencies`.
    NotFound,
    /// The root declares the dependency at a different version string.
    VersionMismatch,
}

/// One detected drift between a sub-package and the root manifest.
///
/// Findings are immutable once emitted and keep declaration order: the engine
/// never re-sorts them, so a package's findings appear in the same order as
/// the keys of its `peerDependencies` object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub kind: ProblemKind,
    /// Sub-package directory name under `packages/`.
    pub package: String,
    /// Name of the drifting dependency.
    pub dependency: String,
    /// Version declared in the root `devDependencies`; `None` for
    /// [`ProblemKind::NotFound`].
    pub required_version: Option<String>,
    /// Version the sub-package declares in its `peerDependencies`.
    pub declared_version: String,
    /// Manifest the declaration came from.
    pub manifest: RepoPath,
}

/// Maps cleanly to CI signals: pass is exit 0, fail is exit 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}
