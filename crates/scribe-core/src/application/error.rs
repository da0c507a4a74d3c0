//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while scaffolding an article.
///
/// Filesystem variants keep the [`io::ErrorKind`] so callers can tell a
/// permission problem from a name collision without string matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The articles directory could not be created or made available.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The article file could not be written.
    #[error("Failed to write {path}: {reason}")]
    Write {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The random source could not produce bytes.
    #[error("Entropy source failed: {reason}")]
    Entropy { reason: String },
}

impl ApplicationError {
    pub fn directory_creation(path: &Path, err: &io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn write(path: &Path, err: &io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// The I/O error kind, for filesystem variants.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::DirectoryCreation { kind, .. } | Self::Write { kind, .. } => Some(*kind),
            Self::Entropy { .. } => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreation { path, kind, .. } => match kind {
                io::ErrorKind::PermissionDenied => vec![
                    format!("No permission to create: {}", path.display()),
                    "Choose a directory you can write to with --dir".into(),
                ],
                io::ErrorKind::AlreadyExists | io::ErrorKind::NotADirectory => vec![
                    format!("'{}' exists but is not a directory", path.display()),
                    "Rename or remove that file, or pass a different --dir".into(),
                ],
                _ => vec![
                    format!("Failed to prepare: {}", path.display()),
                    "Check that every parent path is a writable directory".into(),
                ],
            },
            Self::Write { path, kind, .. } => match kind {
                io::ErrorKind::AlreadyExists => vec![
                    format!("A file already exists at {}", path.display()),
                    "It was left untouched; run the command again for a fresh slug".into(),
                ],
                io::ErrorKind::PermissionDenied => vec![
                    format!("No write permission for {}", path.display()),
                    "Check the permissions of the articles directory".into(),
                ],
                _ => vec![
                    format!("Failed to write: {}", path.display()),
                    "Check available disk space".into(),
                    "A partially written file may remain; remove it before retrying".into(),
                ],
            },
            Self::Entropy { .. } => vec![
                "The operating system random source is unavailable".into(),
                "This is likely an environment problem; try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreation { .. } | Self::Write { .. } => ErrorCategory::Filesystem,
            Self::Entropy { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_keep_io_kind() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ApplicationError::write(Path::new("a/b.md"), &io_err);
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert!(err.to_string().contains("a/b.md"));
    }

    #[test]
    fn collision_suggestion_mentions_untouched_file() {
        let io_err = io::Error::new(io::ErrorKind::AlreadyExists, "exists");
        let err = ApplicationError::write(Path::new("a/b.md"), &io_err);
        assert!(err.suggestions().iter().any(|s| s.contains("untouched")));
    }

    #[test]
    fn directory_and_write_errors_display_differently() {
        let io_err = io::Error::new(io::ErrorKind::Other, "boom");
        let dir = ApplicationError::directory_creation(Path::new("x"), &io_err);
        let write = ApplicationError::write(Path::new("x"), &io_err);
        assert_ne!(dir.to_string(), write.to_string());
        assert!(dir.to_string().starts_with("Failed to create directory"));
    }
}
