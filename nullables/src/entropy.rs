//! Nullable entropy: deterministic mnemonic generation.

use multiseed_crypto::EntropySource;
use std::sync::Mutex;

/// A deterministic entropy source for testing.
///
/// Each call fills the buffer with the next pre-configured byte, cycling
/// through the sequence.
pub struct NullEntropy {
    fills: Vec<u8>,
    index: Mutex<usize>,
}

impl NullEntropy {
    /// Create with a sequence of fill bytes.
    pub fn new(fills: Vec<u8>) -> Self {
        assert!(!fills.is_empty(), "NullEntropy needs at least one fill byte");
        Self {
            fills,
            index: Mutex::new(0),
        }
    }

    /// Every call yields all-zero entropy ("abandon ... about" for 12 words).
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Number of times entropy has been requested.
    pub fn calls(&self) -> usize {
        *self.index.lock().unwrap()
    }
}

impl EntropySource for NullEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        let mut idx = self.index.lock().unwrap();
        dest.fill(self.fills[*idx % self.fills.len()]);
        *idx += 1;
    }
}
