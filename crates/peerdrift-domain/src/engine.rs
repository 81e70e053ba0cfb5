use crate::checks;
use crate::model::WorkspaceModel;
use crate::report::{DomainReport, KindCounts, ScanData};
use peerdrift_types::{Finding, Verdict};

/// Evaluate the whole workspace model.
///
/// Findings keep scan order: packages in model order, declarations in
/// manifest order within a package. No re-sorting happens anywhere.
pub fn evaluate(model: &WorkspaceModel) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, &mut findings);

    let verdict = if findings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let counts = KindCounts::from_findings(&findings);

    let data = ScanData {
        packages_scanned: model.packages.len() as u32,
        peer_dependencies_checked: model.peer_dependency_count(),
        findings_total: findings.len() as u32,
    };

    DomainReport {
        verdict,
        findings,
        counts,
        data,
    }
}
