//! Hardened BIP-44 derivation paths of the form `m/44'/{coin}'/0'/{index}'`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coin::CoinType;
use crate::error::TypesError;

/// Offset added to an index to mark it hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A fully hardened BIP-44 path.
///
/// Purpose is fixed at 44 and account at 0; only the coin type and the
/// trailing address index vary. Both must be below [`HARDENED_OFFSET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivationPath {
    coin_type: CoinType,
    address_index: u32,
}

impl DerivationPath {
    pub const PURPOSE: u32 = 44;
    pub const ACCOUNT: u32 = 0;

    pub fn new(coin_type: CoinType, address_index: u32) -> Result<Self, TypesError> {
        if coin_type.code() >= HARDENED_OFFSET {
            return Err(TypesError::ReservedIndex(coin_type.code()));
        }
        if address_index >= HARDENED_OFFSET {
            return Err(TypesError::ReservedIndex(address_index));
        }
        Ok(Self {
            coin_type,
            address_index,
        })
    }

    pub fn coin_type(&self) -> CoinType {
        self.coin_type
    }

    pub fn address_index(&self) -> u32 {
        self.address_index
    }

    /// Unhardened level indices, root first: `[44, coin, 0, index]`.
    pub fn levels(&self) -> [u32; 4] {
        [
            Self::PURPOSE,
            self.coin_type.code(),
            Self::ACCOUNT,
            self.address_index,
        ]
    }

    /// Level indices with the hardened offset applied.
    pub fn hardened_levels(&self) -> [u32; 4] {
        self.levels().map(|level| level | HARDENED_OFFSET)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m/{}'/{}'/{}'/{}'",
            Self::PURPOSE,
            self.coin_type,
            Self::ACCOUNT,
            self.address_index
        )
    }
}

impl FromStr for DerivationPath {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidPath(s.to_string());

        let mut parts = s.split('/');
        if parts.next() != Some("m") {
            return Err(invalid());
        }

        let mut levels = [0u32; 4];
        for level in levels.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            let digits = part.strip_suffix('\'').ok_or_else(invalid)?;
            *level = digits.parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        if levels[0] != Self::PURPOSE || levels[2] != Self::ACCOUNT {
            return Err(invalid());
        }

        Self::new(CoinType::new(levels[1]), levels[3])
    }
}
