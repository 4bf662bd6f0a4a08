//! secp256k1 chains (Ethereum, BSC): `0x` hex private key and EIP-55 address.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use multiseed_types::{ChainFamily, KeyMaterial};
use zeroize::Zeroizing;

use super::{ChainKeyAdapter, ChainKeys};
use crate::error::CryptoError;
use crate::hash::keccak256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Secp256k1Adapter;

impl ChainKeyAdapter for Secp256k1Adapter {
    fn family(&self) -> ChainFamily {
        ChainFamily::Secp256k1
    }

    fn encode(&self, material: &KeyMaterial) -> Result<ChainKeys, CryptoError> {
        let secret_key = SecretKey::from_slice(material.secret()).map_err(|_| {
            CryptoError::DerivationFailed("derived scalar is not a valid secp256k1 key".into())
        })?;
        let public = to_checksum_address(&address_bytes(&secret_key.public_key()));

        let digits = Zeroizing::new(hex::encode(material.secret()));
        let private = Zeroizing::new(format!("0x{}", digits.as_str()));

        Ok(ChainKeys { public, private })
    }

    fn decode_public(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        decode_address(encoded).map(|address| address.to_vec())
    }

    fn decode_private(&self, encoded: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        let digits = encoded.strip_prefix("0x").unwrap_or(encoded);
        let mut secret = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(digits, &mut secret[..])
            .map_err(|e| invalid("private key", e.to_string()))?;
        SecretKey::from_slice(&secret[..])
            .map_err(|_| invalid("private key", "scalar out of range".into()))?;
        Ok(secret)
    }
}

/// Keccak-256 of the uncompressed public key (without the `0x04` tag), last 20 bytes.
fn address_bytes(public_key: &PublicKey) -> [u8; 20] {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Render an address with the EIP-55 mixed-case checksum.
///
/// A hex letter is upper-cased when the matching nibble of
/// Keccak-256(lowercase hex) is 8 or more.
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse a `0x`-prefixed address.
///
/// All-lowercase and all-uppercase forms carry no checksum and are accepted
/// as-is; mixed case must match the EIP-55 checksum exactly.
pub fn decode_address(encoded: &str) -> Result<[u8; 20], CryptoError> {
    let digits = encoded
        .strip_prefix("0x")
        .ok_or_else(|| invalid("address", "missing 0x prefix".into()))?;
    if digits.len() != 40 {
        return Err(invalid(
            "address",
            format!("expected 40 hex digits, got {}", digits.len()),
        ));
    }

    let mut address = [0u8; 20];
    hex::decode_to_slice(digits, &mut address).map_err(|e| invalid("address", e.to_string()))?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum_address(&address) != encoded {
        return Err(invalid("address", "EIP-55 checksum mismatch".into()));
    }
    Ok(address)
}

fn invalid(kind: &'static str, reason: String) -> CryptoError {
    CryptoError::InvalidEncoding { kind, reason }
}
