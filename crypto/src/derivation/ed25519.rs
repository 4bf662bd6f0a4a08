//! SLIP-0010 derivation for Ed25519 (hardened children only).

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::error::CryptoError;

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key HMAC key for the Ed25519 curve.
const MASTER_SECRET: &[u8] = b"ed25519 seed";

/// Walk `levels` (each already hardened) from the master key of `seed`.
///
/// `I = HMAC-SHA512(key, data)`; the left half is the child key, the right
/// half the child chain code. Child data is `0x00 || key || ser32(index)`.
pub fn slip10_ed25519(
    seed: &[u8],
    levels: &[u32],
) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    let (mut key, mut chain_code) = hmac_split(MASTER_SECRET, &[seed])?;

    for &index in levels {
        if index < multiseed_types::HARDENED_OFFSET {
            return Err(CryptoError::DerivationFailed(format!(
                "ed25519 only supports hardened derivation, got index {index}"
            )));
        }
        let (child_key, child_chain) =
            hmac_split(&chain_code[..], &[&[0u8][..], &key[..], &index.to_be_bytes()[..]])?;
        key = child_key;
        chain_code = child_chain;
    }

    Ok(key)
}

fn hmac_split(
    key: &[u8],
    data: &[&[u8]],
) -> Result<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>), CryptoError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| CryptoError::DerivationFailed(format!("HMAC init failed: {e}")))?;
    for part in data {
        mac.update(part);
    }
    let mut output = Zeroizing::new([0u8; 64]);
    output.copy_from_slice(&mac.finalize().into_bytes());

    let mut left = Zeroizing::new([0u8; 32]);
    let mut right = Zeroizing::new([0u8; 32]);
    left.copy_from_slice(&output[..32]);
    right.copy_from_slice(&output[32..]);
    Ok((left, right))
}
