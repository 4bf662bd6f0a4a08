//! Nullable infrastructure for deterministic testing.
//!
//! The wallet store's external dependencies (entropy and persistence) are
//! abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically, including injected failures
//! - Never touch the filesystem or the OS random source
//!
//! Usage: swap real implementations for nullables in tests.

pub mod entropy;
pub mod persistence;

pub use entropy::NullEntropy;
pub use persistence::NullPersistence;
