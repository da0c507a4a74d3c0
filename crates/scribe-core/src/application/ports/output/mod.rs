//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scribe-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ScribeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scribe_adapters::filesystem::LocalFilesystem` (production)
/// - `scribe_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors.
    ///
    /// Must succeed when the directory already exists, including when a
    /// concurrent caller created it first.
    fn ensure_dir(&self, path: &Path) -> ScribeResult<()>;

    /// Write `content` to a file that must not exist yet.
    ///
    /// An existing entry at `path` is an `ApplicationError::Write` with kind
    /// `AlreadyExists`; it is never overwritten.
    fn create_new_file(&self, path: &Path, content: &str) -> ScribeResult<()>;
}

/// Port for random bytes.
///
/// Implemented by:
/// - `scribe_adapters::entropy::OsEntropy` (production, OS CSPRNG)
/// - `scribe_adapters::entropy::FixedEntropy` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> ScribeResult<()>;
}
