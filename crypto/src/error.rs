//! Errors from mnemonic handling, derivation and chain encoding.

use multiseed_types::{CoinType, TypesError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error("unsupported chain: coin type {0}")]
    UnsupportedChain(CoinType),

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("invalid {kind} encoding: {reason}")]
    InvalidEncoding { kind: &'static str, reason: String },
}

impl From<TypesError> for CryptoError {
    fn from(e: TypesError) -> Self {
        CryptoError::DerivationFailed(e.to_string())
    }
}
