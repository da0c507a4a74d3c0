//! Entropy adapters.

mod fixed;
mod os;

pub use fixed::FixedEntropy;
pub use os::OsEntropy;
