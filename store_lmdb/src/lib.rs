//! LMDB storage backend for wallet sessions.
//!
//! Implements [`multiseed_store::WalletPersistence`] using the `heed` LMDB
//! bindings. The three session records live in one named database inside a
//! single environment and are replaced together in one write transaction.

pub mod environment;
pub mod error;
pub mod session;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use session::LmdbWalletStore;
