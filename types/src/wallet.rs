//! The wallet record produced by the derivation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::TypesError;
use crate::path::DerivationPath;

/// A derived wallet: chain-native encodings of one keypair plus the phrase
/// and path it came from.
///
/// Immutable once built. The private key and mnemonic are zeroized on drop;
/// `Debug` only shows the public half. This type intentionally does not
/// implement `Clone`.
#[derive(PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[zeroize(skip)]
    public_key: String,
    private_key: String,
    mnemonic: String,
    #[zeroize(skip)]
    derivation_path: String,
}

impl Wallet {
    /// Assemble a wallet from already-encoded parts.
    ///
    /// Intended for the derivation pipeline; consumers receive wallets by
    /// reference from the wallet store.
    pub fn new(
        public_key: String,
        private_key: String,
        mnemonic: String,
        path: &DerivationPath,
    ) -> Self {
        Self {
            public_key,
            private_key,
            mnemonic,
            derivation_path: path.to_string(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn derivation_path(&self) -> &str {
        &self.derivation_path
    }

    /// Parse the stored path string back into a structured path.
    pub fn path(&self) -> Result<DerivationPath, TypesError> {
        self.derivation_path.parse()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key)
            .field("derivation_path", &self.derivation_path)
            .finish_non_exhaustive()
    }
}
