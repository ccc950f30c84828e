// src/cli/run.rs
//! Wires the parsed flags to the detection pipeline and computes the exit.

use super::args::Cli;
use crate::config::ConfigFile;
use crate::detect;
use crate::error::{InitCheckError, Result};
use crate::exit::InitCheckExit;
use crate::folders;
use crate::paths;
use crate::presence::SourceCache;
use crate::repo::Repository;
use crate::report::{self, HygieneReport};
use crate::skip;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Runs the full pipeline: snapshot the repository, classify folders,
/// apply the skip list, detect missing markers, act, then verify no marker
/// is untracked.
pub fn execute(cli: &Cli, repo: &dyn Repository) -> Result<InitCheckExit> {
    if cli.track && !cli.create {
        return Err(InitCheckError::Usage(
            "--track only makes sense together with --create".to_string(),
        ));
    }

    let root = repo.root()?;
    let config = ConfigFile::load(&root)?;
    let scope_roots = resolve_scope_roots(cli, &config, &root)?;

    // One snapshot per run, taken before any mutation: markers created
    // below must not feed back into this run's untracked check.
    let tracked = repo.tracked_files()?;
    let untracked = repo.untracked_files()?;

    if cli.verbose {
        eprintln!(
            "{}",
            format!(
                "initcheck: {} tracked, {} untracked paths under {}",
                tracked.len(),
                untracked.len(),
                root.display()
            )
            .dimmed()
        );
    }

    let mut folder_set = folders::folders_with_tracked_files(&root, &tracked);
    let expect_root = cli.expect_root_init || config.scan.expect_root_init;
    if !expect_root {
        folder_set.remove(&root);
    }

    if let Some(raw) = skip_list_spec(cli, &config) {
        folder_set = skip::apply_skip_list(&raw, &root, &folder_set)?;
        if cli.verbose {
            eprintln!(
                "{}",
                format!("initcheck: {} folders after skip list", folder_set.len()).dimmed()
            );
        }
    }

    let mut cache = SourceCache::new();
    let missing = detect::find_missing_markers(&folder_set, &scope_roots, &mut cache);
    let untracked_markers = report::untracked_markers(&root, &untracked, &scope_roots);

    if cli.create {
        report::create_missing(repo, &missing, cli.track)?;
    }

    if cli.json {
        report::print_json(&HygieneReport::new(&missing, &untracked_markers))?;
    } else {
        if cli.create {
            report::print_create_summary(&missing, cli.track);
        } else {
            report::print_missing_report(&missing);
        }
        report::print_untracked(&untracked_markers);
    }

    // Untracked markers win over missing ones: create mode repairs the
    // latter but cannot repair the former.
    Ok(if !untracked_markers.is_empty() {
        InitCheckExit::UntrackedMarkers
    } else if !missing.is_empty() {
        InitCheckExit::MissingMarkers
    } else {
        InitCheckExit::Clean
    })
}

/// CLI flag first, config file second. `None` disables skip validation.
fn skip_list_spec(cli: &Cli, config: &ConfigFile) -> Option<String> {
    if let Some(raw) = &cli.skip_folders {
        return Some(raw.clone());
    }
    if config.scan.skip_folders.is_empty() {
        return None;
    }
    Some(config.scan.skip_folders.join(","))
}

/// Resolves the in-scope roots from `--python-folders` or the config file.
/// Having none at all is a usage error: without a scope the check would
/// silently pass everywhere.
fn resolve_scope_roots(
    cli: &Cli,
    config: &ConfigFile,
    root: &Path,
) -> Result<BTreeSet<PathBuf>> {
    let entries: Vec<String> = match cli.python_folders.as_deref() {
        Some(raw) => raw.split(',').map(str::to_string).collect(),
        None => config.scan.python_folders.clone(),
    };
    let entries: Vec<String> = entries.into_iter().filter(|e| !e.is_empty()).collect();

    if entries.is_empty() {
        return Err(InitCheckError::Usage(
            "no python folders given; pass --python-folders or set [scan] python-folders in initcheck.toml"
                .to_string(),
        ));
    }

    let mut roots = BTreeSet::new();
    for entry in &entries {
        let path = Path::new(entry);
        if path.is_absolute() {
            return Err(InitCheckError::Usage(format!(
                "python folder must be relative to the repository root: {entry}"
            )));
        }
        let Some(resolved) = paths::resolve_under_root(root, path) else {
            return Err(InitCheckError::Usage(format!(
                "python folder escapes the repository root: {entry}"
            )));
        };
        roots.insert(resolved);
    }
    Ok(roots)
}
