// src/config.rs
//! Optional `initcheck.toml` settings. CLI flags always win over the file.

use crate::error::{InitCheckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "initcheck.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScanConfig {
    /// Roots under which the missing-marker rule applies.
    #[serde(default)]
    pub python_folders: Vec<String>,

    /// Folders excluded from the check; validated like `--skip-folders`.
    #[serde(default)]
    pub skip_folders: Vec<String>,

    /// Keep the repository root itself as a package candidate.
    #[serde(default)]
    pub expect_root_init: bool,
}

impl ConfigFile {
    /// Loads `initcheck.toml` from the repository root. A missing file
    /// yields the default config; a malformed file is a hard error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let Ok(content) = fs::read_to_string(&path) else {
            return Ok(Self::default());
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(InitCheckError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = ConfigFile::parse("").unwrap();
        assert!(config.scan.python_folders.is_empty());
        assert!(config.scan.skip_folders.is_empty());
        assert!(!config.scan.expect_root_init);
    }

    #[test]
    fn test_full_scan_section() {
        let config = ConfigFile::parse(
            r#"
[scan]
python-folders = ["src", "tests"]
skip-folders = ["migrations"]
expect-root-init = true
"#,
        )
        .unwrap();
        assert_eq!(config.scan.python_folders, vec!["src", "tests"]);
        assert_eq!(config.scan.skip_folders, vec!["migrations"]);
        assert!(config.scan.expect_root_init);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(ConfigFile::parse("[scan\npython-folders = 3").is_err());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ConfigFile::load(temp.path()).unwrap();
        assert!(config.scan.python_folders.is_empty());
    }
}
