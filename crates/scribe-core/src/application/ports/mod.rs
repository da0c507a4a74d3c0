//! Application ports (traits) for external dependencies.
//!
//! Adapters in `scribe-adapters` implement these.
//!
//! - `Filesystem`: directory ensure and create-new file writes
//! - `EntropySource`: cryptographically secure random bytes

pub mod output;

pub use output::{EntropySource, Filesystem};
