//! BIP-32 derivation for secp256k1.

use bip32::{ChildNumber, XPrv};
use multiseed_types::HARDENED_OFFSET;
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Walk `levels` from the BIP-32 master key of `seed`.
///
/// Levels carry their hardened bit inline, as in [`DerivationPath::hardened_levels`].
///
/// [`DerivationPath::hardened_levels`]: multiseed_types::DerivationPath::hardened_levels
pub fn bip32_secp256k1(
    seed: &[u8],
    levels: &[u32],
) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    let mut xprv = XPrv::new(seed).map_err(|e| {
        CryptoError::DerivationFailed(format!("failed to create master key: {e}"))
    })?;

    for &level in levels {
        let hardened = level >= HARDENED_OFFSET;
        let child = ChildNumber::new(level & !HARDENED_OFFSET, hardened).map_err(|e| {
            CryptoError::DerivationFailed(format!("invalid child index {level}: {e}"))
        })?;
        xprv = xprv.derive_child(child).map_err(|e| {
            CryptoError::DerivationFailed(format!("child derivation failed: {e}"))
        })?;
    }

    let key_bytes: [u8; 32] = xprv.private_key().to_bytes().into();
    Ok(Zeroizing::new(key_bytes))
}
