use multiseed_crypto::CryptoError;
use multiseed_store::StoreError;
use multiseed_types::CoinType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("unsupported chain: coin type {0}")]
    UnsupportedChain(CoinType),

    #[error("key derivation failed: {0}")]
    DerivationFailure(String),

    #[error("index {index} out of range for {len} wallets")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no active mnemonic in this session")]
    NoActiveMnemonic,

    #[error("mnemonic differs from the phrase of the populated session")]
    MnemonicMismatch,

    #[error("session already holds wallets; clear it before starting a new phrase")]
    SessionPopulated,

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

impl From<CryptoError> for WalletError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidMnemonic(reason) => WalletError::InvalidMnemonic(reason),
            CryptoError::UnsupportedChain(coin) => WalletError::UnsupportedChain(coin),
            CryptoError::DerivationFailed(reason) => WalletError::DerivationFailure(reason),
            other @ CryptoError::InvalidEncoding { .. } => {
                WalletError::DerivationFailure(other.to_string())
            }
        }
    }
}
