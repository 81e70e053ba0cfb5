use peerdrift_types::{Finding, ProblemKind};

/// Render findings as the human-readable terminal report.
///
/// Findings are grouped into one block per package, in the order they were
/// emitted, followed by a trailing summary line. A clean scan renders to the
/// empty string.
pub fn render_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let mut current_package: Option<&str> = None;
    let mut package_count = 0u32;

    for f in findings {
        if current_package != Some(f.package.as_str()) {
            current_package = Some(f.package.as_str());
            package_count += 1;
            out.push_str(&format!("\nProblems found in package: {}\n", f.package));
        }
        out.push_str(&render_finding(f));
        out.push('\n');
    }

    out.push_str(&format!(
        "\nFound {} dependency problem(s) in {} package(s).\n",
        findings.len(),
        package_count
    ));

    out
}

fn render_finding(f: &Finding) -> String {
    match f.kind {
        ProblemKind::NotFound => format!(
            "dependency '{}' not found in root package.json devDependencies",
            f.dependency
        ),
        ProblemKind::VersionMismatch => format!(
            "dependency '{}' requires version {} but {} is declared",
            f.dependency,
            f.required_version.as_deref().unwrap_or("?"),
            f.declared_version
        ),
    }
}
