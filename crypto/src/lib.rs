//! Deterministic multi-chain key derivation.
//!
//! - **BIP-39** mnemonic generation/validation and seed derivation
//! - **SLIP-0010** hardened derivation for Ed25519 chains (Solana)
//! - **BIP-32** hardened derivation for secp256k1 chains (Ethereum, BSC)
//! - Chain adapters turning derived bytes into base-58 keypairs or EIP-55 addresses

pub mod adapter;
pub mod derivation;
pub mod error;
pub mod hash;
pub mod mnemonic;
pub mod seed;

pub use adapter::{ChainAdapter, ChainKeyAdapter, ChainKeys, Ed25519Adapter, Secp256k1Adapter};
pub use derivation::derive_key_material;
pub use error::CryptoError;
pub use hash::keccak256;
pub use mnemonic::{
    generate_mnemonic, generate_mnemonic_with, parse_mnemonic, validate_mnemonic, EntropySource,
    OsEntropy, Phrase, WordCount,
};
pub use seed::to_seed;
