//! CLI entry point for peerdrift.
//!
//! This module is intentionally thin: it handles argument parsing, printing,
//! and exit codes. All scanning and evaluation lives in the library crates.
//!
//! Exit codes: 0 = no drift, 1 = drift found, 2 = fatal error (usage,
//! unreadable root manifest, unprocessable sub-package manifest).

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use peerdrift_types::Verdict;
use std::collections::BTreeSet;

#[derive(Parser, Debug)]
#[command(
    name = "peerdrift",
    version,
    about = "Peer-dependency version drift check for npm-style monorepos"
)]
struct Cli {
    /// Repository root (directory containing the root package.json).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Comma-separated sub-package directory names to skip, e.g. "pkg1,pkg2".
    #[arg(long, value_name = "PKGS")]
    ignore: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("peerdrift error: {err:#}");
            std::process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let ignore = parse_ignore_list(cli.ignore.as_deref());

    let model = peerdrift_repo::build_workspace_model(&cli.repo_root, &ignore)
        .context("inspect workspace")?;

    let report = peerdrift_domain::evaluate(&model);
    print!("{}", peerdrift_render::render_report(&report.findings));

    Ok(verdict_exit_code(report.verdict))
}

/// Split a comma-separated `--ignore` value into directory names.
/// Tokens are whitespace-trimmed; empty tokens are dropped.
fn parse_ignore_list(arg: Option<&str>) -> BTreeSet<String> {
    arg.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Map verdict to exit code: 0 = pass, 1 = drift found.
fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
