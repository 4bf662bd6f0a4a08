//! Ed25519 chains (Solana): base-58 public key and base-58 64-byte keypair.

use ed25519_dalek::{SigningKey, VerifyingKey};
use multiseed_types::{ChainFamily, KeyMaterial};
use zeroize::Zeroizing;

use super::{ChainKeyAdapter, ChainKeys};
use crate::error::CryptoError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ed25519Adapter;

impl ChainKeyAdapter for Ed25519Adapter {
    fn family(&self) -> ChainFamily {
        ChainFamily::Ed25519
    }

    fn encode(&self, material: &KeyMaterial) -> Result<ChainKeys, CryptoError> {
        let signing_key = SigningKey::from_bytes(material.secret());
        let public = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();

        // Private encoding is the secret seed followed by the public key.
        let keypair = Zeroizing::new(signing_key.to_keypair_bytes());
        let private = Zeroizing::new(bs58::encode(&keypair[..]).into_string());

        Ok(ChainKeys { public, private })
    }

    fn decode_public(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| invalid("public key", e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| invalid("public key", format!("expected 32 bytes, got {}", bytes.len())))?;
        VerifyingKey::from_bytes(&arr)
            .map_err(|_| invalid("public key", "not a valid curve point".into()))?;
        Ok(bytes)
    }

    fn decode_private(&self, encoded: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        let bytes = Zeroizing::new(
            bs58::decode(encoded)
                .into_vec()
                .map_err(|e| invalid("private key", e.to_string()))?,
        );
        if bytes.len() != 64 {
            return Err(invalid(
                "private key",
                format!("expected 64-byte keypair, got {} bytes", bytes.len()),
            ));
        }

        let mut secret = Zeroizing::new([0u8; 32]);
        secret.copy_from_slice(&bytes[..32]);
        let expected_public = SigningKey::from_bytes(&secret).verifying_key().to_bytes();
        if expected_public[..] != bytes[32..] {
            return Err(invalid(
                "private key",
                "public half does not match the secret".into(),
            ));
        }
        Ok(secret)
    }
}

fn invalid(kind: &'static str, reason: String) -> CryptoError {
    CryptoError::InvalidEncoding { kind, reason }
}
