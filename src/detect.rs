// src/detect.rs
//! Missing-marker detection.

use crate::presence::SourceCache;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Package marker looked for in every candidate folder.
pub const MARKER_FILE: &str = "__init__.py";

/// Returns the marker paths to create: one `folder/__init__.py` for every
/// folder that lacks the marker, transitively holds a `.py` file, and sits
/// inside one of the scope roots.
#[must_use]
pub fn find_missing_markers(
    folders: &BTreeSet<PathBuf>,
    scope_roots: &BTreeSet<PathBuf>,
    cache: &mut SourceCache,
) -> BTreeSet<PathBuf> {
    folders
        .iter()
        .filter(|folder| in_scope(folder, scope_roots))
        .filter(|folder| !folder.join(MARKER_FILE).exists())
        .filter(|folder| cache.contains_source_file(folder))
        .map(|folder| folder.join(MARKER_FILE))
        .collect()
}

/// True when `path` equals a scope root or lies underneath one.
#[must_use]
pub fn in_scope(path: &Path, scope_roots: &BTreeSet<PathBuf>) -> bool {
    scope_roots.iter().any(|root| path.starts_with(root))
}
