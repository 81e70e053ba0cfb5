//! Shared test utilities for the peerdrift workspace.
//!
//! This crate exists because both the repo adapter tests and the CLI
//! end-to-end tests need to assemble throwaway monorepos, so a
//! `#[cfg(test)]` module inside a single crate would not suffice.

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A throwaway npm-style monorepo on disk: a root `package.json` plus
/// sub-packages under `packages/`. Removed with the value.
pub struct FixtureWorkspace {
    // Held for its Drop; the path is cached as UTF-8.
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureWorkspace {
    /// Create an empty workspace directory (no manifests yet).
    ///
    /// Panics on I/O failure; fixtures are for tests only.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create fixture dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 fixture path");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write the root `package.json`.
    pub fn root_manifest(&self, contents: &str) -> &Self {
        write_file(&self.root.join("package.json"), contents);
        self
    }

    /// Write `packages/<name>/package.json`.
    pub fn package(&self, name: &str, contents: &str) -> &Self {
        write_file(
            &self.root.join("packages").join(name).join("package.json"),
            contents,
        );
        self
    }

    /// Create a sub-package directory with no manifest in it.
    pub fn package_without_manifest(&self, name: &str) -> &Self {
        std::fs::create_dir_all(self.root.join("packages").join(name).as_std_path())
            .expect("create package dir");
        self
    }

    /// Create an empty `packages` directory (a workspace with no members).
    pub fn empty_packages_dir(&self) -> &Self {
        std::fs::create_dir_all(self.root.join("packages").as_std_path())
            .expect("create packages dir");
        self
    }
}

impl Default for FixtureWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent.as_std_path()).expect("create parent");
    }
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_and_packages() {
        let ws = FixtureWorkspace::new();
        ws.root_manifest(r#"{"devDependencies": {}}"#)
            .package("a", r#"{"peerDependencies": {}}"#)
            .package_without_manifest("b");

        assert!(ws.root().join("package.json").exists());
        assert!(ws.root().join("packages/a/package.json").exists());
        assert!(ws.root().join("packages/b").exists());
        assert!(!ws.root().join("packages/b/package.json").exists());
    }
}
