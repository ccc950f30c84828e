// src/repo.rs
//! Git query surface consumed by the pipeline.

use crate::error::{InitCheckError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Version-control access the pipeline needs. `GitRepository` implements it
/// against the `git` executable; tests implement it in memory.
pub trait Repository {
    /// Paths tracked by the index, relative to the repository root.
    fn tracked_files(&self) -> Result<Vec<PathBuf>>;

    /// Paths present on disk but untracked, standard ignore rules applied.
    fn untracked_files(&self) -> Result<Vec<PathBuf>>;

    /// Absolute path of the repository root.
    fn root(&self) -> Result<PathBuf>;

    /// Stages the given paths.
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;
}

pub struct GitRepository;

impl Repository for GitRepository {
    fn tracked_files(&self) -> Result<Vec<PathBuf>> {
        // --full-name keeps paths root-relative even from a subdirectory.
        let stdout = run_git(&["ls-files", "--full-name"])?;
        Ok(lines_to_paths(&stdout))
    }

    fn untracked_files(&self) -> Result<Vec<PathBuf>> {
        let stdout = run_git(&["ls-files", "--full-name", "--others", "--exclude-standard"])?;
        Ok(lines_to_paths(&stdout))
    }

    fn root(&self) -> Result<PathBuf> {
        let stdout = run_git(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(stdout.trim()))
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let output = Command::new("git")
            .arg("add")
            .arg("--")
            .args(paths)
            .output()
            .map_err(|source| InitCheckError::Io {
                source,
                path: PathBuf::from("git"),
            })?;
        if !output.status.success() {
            return Err(InitCheckError::Repository {
                command: "add".to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Checks if we're inside a git work tree.
#[must_use]
pub fn in_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn run_git(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|source| InitCheckError::Io {
            source,
            path: PathBuf::from("git"),
        })?;

    if !output.status.success() {
        return Err(InitCheckError::Repository {
            command: args.join(" "),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn lines_to_paths(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
