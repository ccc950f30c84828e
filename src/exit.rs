// src/exit.rs
//! Standardized process exit codes for `initcheck`.
//!
//! Provides a stable contract for pre-commit and scripts.

use crate::error::InitCheckError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum InitCheckExit {
    /// No missing or untracked marker files.
    Clean = 0,
    /// Folders with Python sources but no `__init__.py` were found.
    MissingMarkers = 1,
    /// An `__init__.py` exists on disk but is not tracked by git.
    UntrackedMarkers = 2,
    /// Invalid flag combination (e.g. `--track` without `--create`).
    Usage = 3,
    /// A skip-list entry failed validation.
    SkipList = 4,
}

impl InitCheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for InitCheckExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&InitCheckError> for InitCheckExit {
    fn from(err: &InitCheckError) -> Self {
        match err {
            InitCheckError::Usage(_) => Self::Usage,
            InitCheckError::SkipList(_) => Self::SkipList,
            // I/O, git and config failures share code 1: pre-commit treats
            // any non-zero status as a failed hook.
            InitCheckError::Io { .. }
            | InitCheckError::NotInGitRepo
            | InitCheckError::Repository { .. }
            | InitCheckError::Config(_)
            | InitCheckError::Json(_) => Self::MissingMarkers,
        }
    }
}
