// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitCheckError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    SkipList(#[from] SkipListError),

    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("not inside a git repository")]
    NotInGitRepo,

    #[error("git {command} failed: {detail}")]
    Repository { command: String, detail: String },

    #[error("invalid initcheck.toml: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InitCheckError>;

// Allow `?` on std::io::Error by converting to InitCheckError::Io with unknown path.
impl From<std::io::Error> for InitCheckError {
    fn from(source: std::io::Error) -> Self {
        InitCheckError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

/// One variant per skip-list rule, each carrying the offending entry.
/// A failing entry rejects the whole list; no folder is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipListError {
    #[error("found empty path in skipped folders")]
    EmptyPath,

    #[error("found absolute path in skipped folders: {}", .0.display())]
    AbsolutePath(PathBuf),

    #[error("skipped folder escapes the repository root: {}", .0.display())]
    ForbiddenTraversal(PathBuf),

    #[error("skipped folder does not exist: {}", .0.display())]
    NonExistentFolder(PathBuf),

    #[error("skipped folder is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("found untracked path in skipped folders: {}", .0.display())]
    UntrackedFolder(PathBuf),

    #[error("found duplicate path in skipped folders: {}", .0.display())]
    DuplicatePath(PathBuf),
}

impl SkipListError {
    /// The entry that failed validation, empty for the empty-string rule.
    #[must_use]
    pub fn offending_path(&self) -> &Path {
        match self {
            Self::EmptyPath => Path::new(""),
            Self::AbsolutePath(p)
            | Self::ForbiddenTraversal(p)
            | Self::NonExistentFolder(p)
            | Self::NotADirectory(p)
            | Self::UntrackedFolder(p)
            | Self::DuplicatePath(p) => p,
        }
    }
}
