//! BIP-39 mnemonic generation and validation (English wordlist only).
//!
//! Generated phrases default to 12 words (128-bit entropy). Validation accepts
//! any standard BIP-39 length and never panics on malformed input.

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Source of entropy for new phrases.
///
/// Production code uses [`OsEntropy`]; tests inject a deterministic source.
pub trait EntropySource {
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Operating-system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Supported lengths for newly generated phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordCount {
    #[default]
    Twelve,
    TwentyFour,
}

impl WordCount {
    pub fn entropy_len(&self) -> usize {
        match self {
            Self::Twelve => 16,
            Self::TwentyFour => 32,
        }
    }

    pub fn words(&self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
        }
    }
}

/// A mnemonic phrase that has passed wordlist and checksum validation.
///
/// Only obtainable through [`generate_mnemonic`] or [`parse_mnemonic`], so
/// holding a `Phrase` is proof of validity. The word indices are wiped when
/// the phrase is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Phrase(Mnemonic);

// `Mnemonic` is `ZeroizeOnDrop` with bip39's `zeroize` feature.
impl zeroize::ZeroizeOnDrop for Phrase {}

impl Phrase {
    pub(crate) fn inner(&self) -> &Mnemonic {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.word_count()
    }

    /// The phrase words, in order.
    pub fn words(&self) -> Vec<&'static str> {
        self.0.words().collect()
    }

    /// Space-joined phrase text. Treat the result as secret.
    pub fn to_phrase_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.0.to_string())
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phrase({} words, <redacted>)", self.word_count())
    }
}

/// Generate a new 12-word phrase from OS entropy.
pub fn generate_mnemonic() -> Phrase {
    generate_mnemonic_with(&OsEntropy, WordCount::Twelve)
}

/// Generate a phrase of the given length from an injected entropy source.
pub fn generate_mnemonic_with(source: &dyn EntropySource, count: WordCount) -> Phrase {
    let mut buf = Zeroizing::new([0u8; 32]);
    let entropy = &mut buf[..count.entropy_len()];
    source.fill_bytes(entropy);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .expect("16 or 32 bytes is always a valid BIP-39 entropy length");
    Phrase(mnemonic)
}

/// Parse and validate a candidate phrase.
///
/// Tokens are split on any whitespace; every token must be an English
/// wordlist entry and the checksum must match.
pub fn parse_mnemonic(candidate: &str) -> Result<Phrase, CryptoError> {
    let normalized = Zeroizing::new(candidate.split_whitespace().collect::<Vec<_>>().join(" "));
    if normalized.is_empty() {
        return Err(CryptoError::InvalidMnemonic("empty phrase".into()));
    }
    Mnemonic::parse_in_normalized(Language::English, &normalized)
        .map(Phrase)
        .map_err(|e| CryptoError::InvalidMnemonic(describe(e)))
}

/// Error text that names the failure without echoing any phrase word.
fn describe(error: bip39::Error) -> String {
    match error {
        bip39::Error::BadWordCount(count) => {
            format!("{count} words; expected 12, 15, 18, 21 or 24")
        }
        bip39::Error::UnknownWord(index) => format!("unknown word at position {}", index + 1),
        bip39::Error::BadEntropyBitCount(bits) => format!("unsupported entropy length of {bits} bits"),
        bip39::Error::InvalidChecksum => "checksum mismatch".to_string(),
        bip39::Error::AmbiguousLanguages(_) => "phrase matches more than one wordlist".to_string(),
    }
}

/// Check whether a candidate phrase is a valid BIP-39 mnemonic.
pub fn validate_mnemonic(candidate: &str) -> bool {
    parse_mnemonic(candidate).is_ok()
}
