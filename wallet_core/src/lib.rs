//! Wallet session engine for multiseed.
//!
//! Provides everything a wallet front end needs:
//! - The derivation pipeline (phrase → seed → path → chain keypair)
//! - The ordered wallet collection with per-wallet metadata
//! - The session store: generate, add, import, remove, clear, visibility
//! - Persistence through the [`multiseed_store::WalletPersistence`] port

pub mod collection;
pub mod error;
pub mod pipeline;
pub mod wallet_store;

pub use collection::{Phase, SensitiveField, Visibility, WalletCollection, WalletEntry};
pub use error::WalletError;
pub use pipeline::derive_wallet;
pub use wallet_store::WalletStore;
