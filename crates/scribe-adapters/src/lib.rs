//! Infrastructure adapters for Scribe.
//!
//! This crate implements the ports defined in `scribe-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod entropy;
pub mod filesystem;

// Re-export commonly used adapters
pub use entropy::{FixedEntropy, OsEntropy};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
