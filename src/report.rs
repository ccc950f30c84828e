// src/report.rs
//! Terminal behaviors: report or create the missing markers, and the
//! untracked-marker consistency check.

use crate::detect::{self, MARKER_FILE};
use crate::error::{InitCheckError, Result};
use crate::repo::Repository;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable run summary for `--json`.
#[derive(Debug, Serialize)]
pub struct HygieneReport {
    pub missing: Vec<PathBuf>,
    pub untracked_markers: Vec<PathBuf>,
}

impl HygieneReport {
    #[must_use]
    pub fn new(missing: &BTreeSet<PathBuf>, untracked: &BTreeSet<PathBuf>) -> Self {
        Self {
            missing: missing.iter().cloned().collect(),
            untracked_markers: untracked.iter().cloned().collect(),
        }
    }
}

/// Report mode: each missing marker on its own line, sorted, then a count.
pub fn print_missing_report(missing: &BTreeSet<PathBuf>) {
    for path in missing {
        println!("{}", path.display());
    }
    let line = format!("Found {} missing {MARKER_FILE} file(s).", missing.len());
    if missing.is_empty() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red().bold());
    }
}

/// Create mode: writes each marker as a single-newline placeholder, then
/// stages them when tracking was requested.
pub fn create_missing(
    repo: &dyn Repository,
    missing: &BTreeSet<PathBuf>,
    track: bool,
) -> Result<()> {
    for path in missing {
        fs::write(path, "\n").map_err(|source| InitCheckError::Io {
            source,
            path: path.clone(),
        })?;
    }
    if track {
        let created: Vec<PathBuf> = missing.iter().cloned().collect();
        repo.stage(&created)?;
    }
    Ok(())
}

/// Count line for create mode: "Added" when the files were also staged.
pub fn print_create_summary(missing: &BTreeSet<PathBuf>, track: bool) {
    let verb = if track { "Added" } else { "Created" };
    let line = format!("{verb} {} missing {MARKER_FILE} file(s).", missing.len());
    if missing.is_empty() {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

/// Filters the untracked snapshot down to marker files inside the scope
/// roots. Scope filtering keeps vendored trees (virtualenvs, checkouts of
/// third-party code) from tripping the check.
#[must_use]
pub fn untracked_markers(
    root: &Path,
    untracked: &[PathBuf],
    scope_roots: &BTreeSet<PathBuf>,
) -> BTreeSet<PathBuf> {
    untracked
        .iter()
        .filter(|path| path.file_name().is_some_and(|name| name == MARKER_FILE))
        .map(|path| root.join(path))
        .filter(|path| detect::in_scope(path, scope_roots))
        .collect()
}

/// Consistency-check output: silent when clean, otherwise each offending
/// marker plus a count line.
pub fn print_untracked(untracked: &BTreeSet<PathBuf>) {
    if untracked.is_empty() {
        return;
    }
    for path in untracked {
        println!("{}", path.display());
    }
    let line = format!("Found {} untracked {MARKER_FILE} file(s).", untracked.len());
    println!("{}", line.red().bold());
}

/// Prints the report as pretty JSON to stdout.
pub fn print_json(report: &HygieneReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_markers_filters_by_name_and_scope() {
        let root = Path::new("/repo");
        let scope: BTreeSet<PathBuf> = [root.to_path_buf()].into_iter().collect();
        let untracked = vec![
            PathBuf::from("a/__init__.py"),
            PathBuf::from("a/foo.py"),
            PathBuf::from("__init__.py"),
        ];
        let markers = untracked_markers(root, &untracked, &scope);
        let expected: BTreeSet<PathBuf> = [root.join("a/__init__.py"), root.join("__init__.py")]
            .into_iter()
            .collect();
        assert_eq!(markers, expected);
    }

    #[test]
    fn test_untracked_markers_outside_scope_ignored() {
        let root = Path::new("/repo");
        let scope: BTreeSet<PathBuf> = [root.join("src")].into_iter().collect();
        let untracked = vec![PathBuf::from("venv/lib/pkg/__init__.py")];
        assert!(untracked_markers(root, &untracked, &scope).is_empty());
    }

    #[test]
    fn test_report_serializes_sorted() {
        let missing: BTreeSet<PathBuf> =
            [PathBuf::from("/r/b/__init__.py"), PathBuf::from("/r/a/__init__.py")]
                .into_iter()
                .collect();
        let report = HygieneReport::new(&missing, &BTreeSet::new());
        assert_eq!(report.missing[0], PathBuf::from("/r/a/__init__.py"));
        assert!(report.untracked_markers.is_empty());
    }
}
