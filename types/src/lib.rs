//! Fundamental types for multiseed.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the coin-type registry, hardened derivation paths, seeds, derived key material
//! and the wallet record itself.

pub mod coin;
pub mod error;
pub mod keys;
pub mod path;
pub mod wallet;

pub use coin::{ChainFamily, CoinType};
pub use error::TypesError;
pub use keys::{KeyMaterial, Seed, SEED_LEN};
pub use path::{DerivationPath, HARDENED_OFFSET};
pub use wallet::Wallet;
