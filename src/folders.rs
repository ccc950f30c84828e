// src/folders.rs
//! Derives candidate package folders from the tracked file list.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Expands the tracked files into the set of every ancestor directory, the
/// repository root included. Input paths are root-relative (as `git
/// ls-files` reports them); the result is absolute under `root` so later
/// set operations and filesystem probes agree on equality.
#[must_use]
pub fn folders_with_tracked_files(root: &Path, tracked: &[PathBuf]) -> BTreeSet<PathBuf> {
    let mut folders = BTreeSet::new();
    folders.insert(root.to_path_buf());

    for file in tracked {
        let mut dir = file.parent();
        while let Some(d) = dir {
            if d.as_os_str().is_empty() {
                break;
            }
            folders.insert(root.join(d));
            dir = d.parent();
        }
    }

    folders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(root: &Path, rels: &[&str]) -> BTreeSet<PathBuf> {
        rels.iter().map(|r| root.join(r)).collect()
    }

    fn classify(root: &Path, files: &[&str]) -> BTreeSet<PathBuf> {
        let tracked: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
        folders_with_tracked_files(root, &tracked)
    }

    #[test]
    fn test_empty_input_yields_root_only() {
        let root = Path::new("/repo");
        let mut expected = set(root, &[]);
        expected.insert(root.to_path_buf());
        assert_eq!(classify(root, &[]), expected);
    }

    #[test]
    fn test_top_level_files_yield_root_only() {
        let root = Path::new("/repo");
        let folders = classify(root, &["foo.py", "bar.py"]);
        assert_eq!(folders.len(), 1);
        assert!(folders.contains(root));
    }

    #[test]
    fn test_nested_file_yields_full_ancestor_chain() {
        let root = Path::new("/repo");
        let folders = classify(root, &["a/b/foo.py"]);
        let mut expected = set(root, &["a", "a/b"]);
        expected.insert(root.to_path_buf());
        assert_eq!(folders, expected);
    }

    #[test]
    fn test_order_independent() {
        let root = Path::new("/repo");
        let forward = classify(root, &["a/foo.py", "b/c/bar.py"]);
        let backward = classify(root, &["b/c/bar.py", "a/foo.py"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_shared_ancestors_deduplicated() {
        let root = Path::new("/repo");
        let folders = classify(root, &["a/foo.py", "a/b/bar.py", "a/b/baz.py"]);
        let mut expected = set(root, &["a", "a/b"]);
        expected.insert(root.to_path_buf());
        assert_eq!(folders, expected);
    }
}
