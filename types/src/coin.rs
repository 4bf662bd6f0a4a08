//! Coin-type registry (SLIP-0044 identifiers) and signature-scheme families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The signature-scheme family a chain uses.
///
/// Selects both the hierarchical derivation scheme and the chain-native
/// keypair/address encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainFamily {
    /// Edwards-curve Ed25519 (SLIP-0010 derivation, base-58 keys).
    Ed25519,
    /// Short-Weierstrass secp256k1 (BIP-32 derivation, EIP-55 addresses).
    Secp256k1,
}

impl ChainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }
}

/// A SLIP-0044 coin type, the second level of a BIP-44 path.
///
/// Any `u32` can be represented; only the codes in [`CoinType::REGISTERED`]
/// map to a [`ChainFamily`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinType(u32);

impl CoinType {
    pub const SOLANA: Self = Self(501);
    pub const ETHEREUM: Self = Self(60);
    /// BNB Smart Chain; shares Ethereum's key and address format.
    pub const BSC: Self = Self(56);

    /// Every coin type with a registered chain family, in display order.
    pub const REGISTERED: [Self; 3] = [Self::SOLANA, Self::ETHEREUM, Self::BSC];

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u32 {
        self.0
    }

    /// The chain family for this coin, or `None` if the code is not registered.
    pub fn family(&self) -> Option<ChainFamily> {
        match self.0 {
            501 => Some(ChainFamily::Ed25519),
            60 | 56 => Some(ChainFamily::Secp256k1),
            _ => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.family().is_some()
    }

    /// Display label for the coin. Unregistered codes map to an empty string.
    pub fn label(&self) -> &'static str {
        match self.0 {
            501 => "Solana",
            60 | 56 => "Ethereum",
            _ => "",
        }
    }
}

impl From<u32> for CoinType {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
