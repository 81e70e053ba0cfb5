use peerdrift_types::{Finding, ProblemKind, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub not_found: u32,
    pub version_mismatch: u32,
}

impl KindCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = KindCounts::default();
        for f in findings {
            match f.kind {
                ProblemKind::NotFound => counts.not_found += 1,
                ProblemKind::VersionMismatch => counts.version_mismatch += 1,
            }
        }
        counts
    }
}

/// Scan statistics surfaced alongside the findings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanData {
    pub packages_scanned: u32,
    pub peer_dependencies_checked: u32,
    pub findings_total: u32,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub counts: KindCounts,
    pub data: ScanData,
}
