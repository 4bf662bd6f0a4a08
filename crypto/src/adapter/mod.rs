//! Chain key adapters: derived key material → chain-native encodings.
//!
//! The set of chain families is closed. Each family is one variant of
//! [`ChainAdapter`], selected by coin type through the registry in
//! [`CoinType::family`]. Adapters never derive keys themselves; they only
//! encode and decode material produced by [`crate::derivation`].

mod ed25519;
mod secp256k1;

pub use ed25519::Ed25519Adapter;
pub use secp256k1::{decode_address, to_checksum_address, Secp256k1Adapter};

use multiseed_types::{ChainFamily, CoinType, KeyMaterial};
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Chain-native string encodings of one keypair.
pub struct ChainKeys {
    /// Public key or address, safe to display.
    pub public: String,
    /// Private key encoding. Zeroized on drop.
    pub private: Zeroizing<String>,
}

impl std::fmt::Debug for ChainKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainKeys")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Encoding rules for one signature-scheme family.
pub trait ChainKeyAdapter {
    fn family(&self) -> ChainFamily;

    /// Encode derived key material as a chain-native keypair.
    fn encode(&self, material: &KeyMaterial) -> Result<ChainKeys, CryptoError>;

    /// Decode a public encoding back to the bytes it was built from
    /// (the 32-byte public key or the 20-byte address).
    fn decode_public(&self, encoded: &str) -> Result<Vec<u8>, CryptoError>;

    /// Decode a private encoding back to the 32 derived secret bytes.
    fn decode_private(&self, encoded: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError>;
}

/// The closed set of supported chain families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainAdapter {
    Ed25519(Ed25519Adapter),
    Secp256k1(Secp256k1Adapter),
}

impl ChainAdapter {
    pub fn for_family(family: ChainFamily) -> Self {
        match family {
            ChainFamily::Ed25519 => Self::Ed25519(Ed25519Adapter),
            ChainFamily::Secp256k1 => Self::Secp256k1(Secp256k1Adapter),
        }
    }

    /// Look up the adapter for a coin type.
    pub fn for_coin(coin_type: CoinType) -> Result<Self, CryptoError> {
        coin_type
            .family()
            .map(Self::for_family)
            .ok_or(CryptoError::UnsupportedChain(coin_type))
    }

    fn inner(&self) -> &dyn ChainKeyAdapter {
        match self {
            Self::Ed25519(adapter) => adapter,
            Self::Secp256k1(adapter) => adapter,
        }
    }
}

impl ChainKeyAdapter for ChainAdapter {
    fn family(&self) -> ChainFamily {
        self.inner().family()
    }

    fn encode(&self, material: &KeyMaterial) -> Result<ChainKeys, CryptoError> {
        if material.family() != self.family() {
            return Err(CryptoError::DerivationFailed(format!(
                "{} key material given to {} adapter",
                material.family().as_str(),
                self.family().as_str()
            )));
        }
        self.inner().encode(material)
    }

    fn decode_public(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        self.inner().decode_public(encoded)
    }

    fn decode_private(&self, encoded: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        self.inner().decode_private(encoded)
    }
}
