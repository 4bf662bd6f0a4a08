//! Persistence port for wallet sessions.
//!
//! A session is stored as three co-located records that are always written
//! together: `wallets`, `mnemonics` and `paths`. Every backend (LMDB, in-memory
//! for testing) implements [`WalletPersistence`]; the wallet store depends only
//! on the trait.

pub mod error;
pub mod session;

pub use error::StoreError;
pub use session::{
    decode_records, encode_records, SessionRecords, SessionSnapshot, MNEMONICS_KEY, PATHS_KEY,
    RECORD_KEYS, WALLETS_KEY,
};

/// Load/save port for the active session.
pub trait WalletPersistence {
    /// Read the persisted session, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<SessionRecords>, StoreError>;

    /// Replace all three records with `snapshot` in one atomic write.
    fn save(&self, snapshot: &SessionSnapshot<'_>) -> Result<(), StoreError>;
}

impl<P: WalletPersistence + ?Sized> WalletPersistence for Box<P> {
    fn load(&self) -> Result<Option<SessionRecords>, StoreError> {
        (**self).load()
    }

    fn save(&self, snapshot: &SessionSnapshot<'_>) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }
}

impl<P: WalletPersistence + ?Sized> WalletPersistence for &P {
    fn load(&self) -> Result<Option<SessionRecords>, StoreError> {
        (**self).load()
    }

    fn save(&self, snapshot: &SessionSnapshot<'_>) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }
}
