//! Operating-system CSPRNG adapter.

use scribe_core::{
    application::{ApplicationError, ports::EntropySource},
    error::ScribeResult,
};

/// Random bytes from the OS (`getrandom(2)`, `BCryptGenRandom`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> ScribeResult<()> {
        getrandom::fill(buf).map_err(|e| {
            ApplicationError::Entropy {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
