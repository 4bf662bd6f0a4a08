//! Secret-bearing byte types: the BIP-39 seed and derived child key material.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::coin::ChainFamily;
use crate::error::TypesError;
use crate::path::DerivationPath;

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// A 64-byte BIP-39 seed, the root input to hierarchical derivation.
///
/// This type intentionally does not implement `Clone` or `Serialize`.
/// Bytes are zeroized on drop and `Debug` is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a seed from an arbitrary slice, rejecting anything but 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypesError> {
        let arr: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| TypesError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Raw 32-byte child key produced by walking a derivation path.
///
/// The bytes are interpreted according to `family`: an Ed25519 secret seed
/// or a secp256k1 secret scalar.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    secret: [u8; 32],
    #[zeroize(skip)]
    path: DerivationPath,
    #[zeroize(skip)]
    family: ChainFamily,
}

impl KeyMaterial {
    pub fn new(secret: [u8; 32], path: DerivationPath, family: ChainFamily) -> Self {
        Self {
            secret,
            path,
            family,
        }
    }

    pub fn secret(&self) -> &[u8; 32] {
        &self.secret
    }

    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    pub fn family(&self) -> ChainFamily {
        self.family
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("path", &self.path.to_string())
            .field("family", &self.family)
            .field("secret", &"<redacted>")
            .finish()
    }
}
