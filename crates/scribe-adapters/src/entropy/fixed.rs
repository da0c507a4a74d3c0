//! Deterministic entropy for tests and reproducible demos.

use std::sync::atomic::{AtomicUsize, Ordering};

use scribe_core::{application::ports::EntropySource, error::ScribeResult};

/// Replays a byte pattern, continuing where the previous call stopped.
///
/// An empty pattern yields zero bytes.
#[derive(Debug, Default)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
    cursor: AtomicUsize,
}

impl FixedEntropy {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Every byte is `byte`.
    pub fn repeating(byte: u8) -> Self {
        Self::new(vec![byte])
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) -> ScribeResult<()> {
        if self.pattern.is_empty() {
            buf.fill(0);
            return Ok(());
        }
        let start = self.cursor.fetch_add(buf.len(), Ordering::Relaxed);
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.pattern[(start + offset) % self.pattern.len()];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_fills_with_one_byte() {
        let mut buf = [0u8; 4];
        FixedEntropy::repeating(0xcd).fill(&mut buf).unwrap();
        assert_eq!(buf, [0xcd; 4]);
    }

    #[test]
    fn pattern_continues_across_calls() {
        let entropy = FixedEntropy::new([1, 2, 3]);
        let mut first = [0u8; 2];
        let mut second = [0u8; 2];
        entropy.fill(&mut first).unwrap();
        entropy.fill(&mut second).unwrap();
        assert_eq!(first, [1, 2]);
        assert_eq!(second, [3, 1]);
    }

    #[test]
    fn empty_pattern_yields_zeros() {
        let mut buf = [9u8; 3];
        FixedEntropy::default().fill(&mut buf).unwrap();
        assert_eq!(buf, [0; 3]);
    }
}
