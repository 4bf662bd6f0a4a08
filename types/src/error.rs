//! Errors raised while constructing or parsing shared types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("index {0} collides with the hardened bit")]
    ReservedIndex(u32),

    #[error("invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },
}
