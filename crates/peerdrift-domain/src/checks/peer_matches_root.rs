use crate::model::{PackageModel, WorkspaceModel};
use peerdrift_types::{Finding, ProblemKind};
use std::collections::BTreeMap;

pub fn run(model: &WorkspaceModel, out: &mut Vec<Finding>) {
    for package in &model.packages {
        out.extend(find_problems(&model.root_dependencies, package));
    }
}

/// Compare one sub-package's peer dependencies against the root map.
///
/// Emits one finding per peer dependency that is absent from the root map or
/// pinned there at a different version string. Exact matches produce nothing.
/// Output order follows the package's declaration order.
pub fn find_problems(
    root_dependencies: &BTreeMap<String, String>,
    package: &PackageModel,
) -> Vec<Finding> {
    let mut out = Vec::new();

    for decl in &package.peer_dependencies {
        match root_dependencies.get(&decl.name) {
            None => out.push(Finding {
                kind: ProblemKind::NotFound,
                package: package.name.clone(),
                dependency: decl.name.clone(),
                required_version: None,
                declared_version: decl.version.clone(),
                manifest: package.manifest.clone(),
            }),
            Some(required) if *required != decl.version => out.push(Finding {
                kind: ProblemKind::VersionMismatch,
                package: package.name.clone(),
                dependency: decl.name.clone(),
                required_version: Some(required.clone()),
                declared_version: decl.version.clone(),
                manifest: package.manifest.clone(),
            }),
            Some(_) => {}
        }
    }

    out
}
