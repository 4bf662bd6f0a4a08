//! Hardened hierarchical derivation from a BIP-39 seed.
//!
//! ```text
//!            Seed (64 bytes)
//!                  │
//!      ┌───────────┴───────────┐
//!      ▼                       ▼
//!  SLIP-0010 ed25519       BIP-32 secp256k1
//!  "ed25519 seed"          "Bitcoin seed"
//!  └─ Solana (501)         ├─ Ethereum (60)
//!                          └─ BSC (56)
//! ```
//!
//! Every level of `m/44'/{coin}'/0'/{index}'` is hardened in both schemes.

mod ed25519;
mod secp256k1;

pub use ed25519::slip10_ed25519;
pub use secp256k1::bip32_secp256k1;

use multiseed_types::{ChainFamily, CoinType, DerivationPath, KeyMaterial, Seed};

use crate::error::CryptoError;

/// Derive the child key for `(coin_type, account_index)` from a seed.
///
/// The scheme follows the coin's chain family. Fails with
/// [`CryptoError::UnsupportedChain`] for unregistered coins and
/// [`CryptoError::DerivationFailed`] for reserved indices or an invalid
/// BIP-32 child.
pub fn derive_key_material(
    seed: &Seed,
    coin_type: CoinType,
    account_index: u32,
) -> Result<KeyMaterial, CryptoError> {
    let family = coin_type
        .family()
        .ok_or(CryptoError::UnsupportedChain(coin_type))?;
    let path = DerivationPath::new(coin_type, account_index)?;

    let secret = match family {
        ChainFamily::Ed25519 => slip10_ed25519(seed.as_bytes(), &path.hardened_levels())?,
        ChainFamily::Secp256k1 => bip32_secp256k1(seed.as_bytes(), &path.hardened_levels())?,
    };

    tracing::debug!(path = %path, family = family.as_str(), "derived key material");
    Ok(KeyMaterial::new(*secret, path, family))
}
