//! BIP-39 seed derivation.

use multiseed_types::Seed;

use crate::mnemonic::Phrase;

/// Derive the 64-byte seed for a validated phrase with an empty passphrase.
///
/// PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic"`. Deterministic: the
/// same phrase always yields the same seed.
pub fn to_seed(phrase: &Phrase) -> Seed {
    Seed::new(phrase.inner().to_seed_normalized(""))
}
