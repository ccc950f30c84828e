// src/skip.rs
//! Skip-list validation and application.

use crate::error::SkipListError;
use crate::paths;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Validates `raw` (a comma-separated folder list) against the folder set
/// and returns the set with every skipped folder removed.
///
/// Rules per entry, first violation wins: non-empty, relative, stays inside
/// the repository root, exists on disk, is a directory, is tracked (member
/// of the folder set), not seen earlier in the list. Any violation rejects
/// the whole list and leaves the folder set untouched.
pub fn apply_skip_list(
    raw: &str,
    root: &Path,
    folders: &BTreeSet<PathBuf>,
) -> Result<BTreeSet<PathBuf>, SkipListError> {
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
    let mut remaining = folders.clone();

    for entry in raw.split(',') {
        if entry.is_empty() {
            return Err(SkipListError::EmptyPath);
        }
        let entry_path = Path::new(entry);
        if entry_path.is_absolute() {
            return Err(SkipListError::AbsolutePath(entry_path.to_path_buf()));
        }
        let Some(resolved) = paths::resolve_under_root(root, entry_path) else {
            return Err(SkipListError::ForbiddenTraversal(entry_path.to_path_buf()));
        };
        if !resolved.exists() {
            return Err(SkipListError::NonExistentFolder(entry_path.to_path_buf()));
        }
        if !resolved.is_dir() {
            return Err(SkipListError::NotADirectory(entry_path.to_path_buf()));
        }
        if !folders.contains(&resolved) {
            return Err(SkipListError::UntrackedFolder(entry_path.to_path_buf()));
        }
        if !seen.insert(resolved.clone()) {
            return Err(SkipListError::DuplicatePath(entry_path.to_path_buf()));
        }
        remaining.remove(&resolved);
    }

    Ok(remaining)
}
