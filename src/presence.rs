// src/presence.rs
//! Memoized "does this folder hold a Python source file" probe.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension that counts as Python source.
pub const SOURCE_EXTENSION: &str = "py";

/// Per-invocation memo for the recursive source probe. The filesystem is
/// assumed immutable for the lifetime of one cache; build a fresh cache for
/// every run.
#[derive(Debug, Default)]
pub struct SourceCache {
    memo: HashMap<PathBuf, bool>,
}

impl SourceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `dir` or any descendant directory holds a `.py`
    /// file. A directory missing from disk answers false: the tracked-file
    /// list can lag behind the live filesystem, and a vanished folder has
    /// nothing to package.
    pub fn contains_source_file(&mut self, dir: &Path) -> bool {
        if let Some(&hit) = self.memo.get(dir) {
            return hit;
        }
        let result = self.scan(dir);
        self.memo.insert(dir.to_path_buf(), result);
        result
    }

    fn scan(&mut self, dir: &Path) -> bool {
        let Ok(entries) = fs::read_dir(dir) else {
            return false;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
                return true;
            }
            if path.is_dir() && self.contains_source_file(&path) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    #[test]
    fn test_empty_dir_has_no_source() {
        let temp = TempDir::new().unwrap();
        assert!(!SourceCache::new().contains_source_file(temp.path()));
    }

    #[test]
    fn test_direct_source_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.py");
        assert!(SourceCache::new().contains_source_file(temp.path()));
    }

    #[test]
    fn test_wrong_extension_does_not_count() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.foo");
        touch(temp.path(), "pyproject.toml");
        assert!(!SourceCache::new().contains_source_file(temp.path()));
    }

    #[test]
    fn test_nested_source_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/b/c.py");
        assert!(SourceCache::new().contains_source_file(temp.path()));
    }

    #[test]
    fn test_missing_dir_answers_false() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("never-created");
        assert!(!SourceCache::new().contains_source_file(&gone));
    }

    #[test]
    fn test_memo_survives_filesystem_change() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.py");
        let mut cache = SourceCache::new();
        assert!(cache.contains_source_file(temp.path()));

        fs::remove_file(temp.path().join("a.py")).unwrap();
        // Same cache, same answer: the memo is the source of truth within
        // one invocation.
        assert!(cache.contains_source_file(temp.path()));
        assert!(!SourceCache::new().contains_source_file(temp.path()));
    }
}
