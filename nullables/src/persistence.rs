//! Nullable persistence: in-memory session records for testing.

use multiseed_store::{
    decode_records, encode_records, SessionRecords, SessionSnapshot, StoreError,
    WalletPersistence,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use zeroize::Zeroizing;

/// An in-memory session store.
///
/// Records go through the same byte encoding as the LMDB backend, so a
/// snapshot that saves here will also load from disk.
#[derive(Default)]
pub struct NullPersistence {
    records: Mutex<HashMap<&'static str, Zeroizing<Vec<u8>>>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
    saves: AtomicUsize,
}

impl NullPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail with a backend error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `load` fail with a backend error.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Raw stored bytes of one record, if it has been written.
    pub fn raw_record(&self, key: &str) -> Option<Vec<u8>> {
        self.records
            .lock()
            .unwrap()
            .get(key)
            .map(|bytes| bytes.to_vec())
    }

    /// Overwrite one record with arbitrary bytes.
    pub fn put_raw(&self, key: &'static str, bytes: &[u8]) {
        self.records
            .lock()
            .unwrap()
            .insert(key, Zeroizing::new(bytes.to_vec()));
    }
}

impl WalletPersistence for NullPersistence {
    fn load(&self) -> Result<Option<SessionRecords>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected load failure".into()));
        }
        let records = self.records.lock().unwrap();
        if records.is_empty() {
            return Ok(None);
        }
        let get = |key: &'static str| {
            records
                .get(key)
                .ok_or_else(|| StoreError::Corruption(format!("record '{key}' is missing")))
        };
        let wallets = get(multiseed_store::WALLETS_KEY)?;
        let mnemonics = get(multiseed_store::MNEMONICS_KEY)?;
        let paths = get(multiseed_store::PATHS_KEY)?;
        decode_records(wallets, mnemonics, paths).map(Some)
    }

    fn save(&self, snapshot: &SessionSnapshot<'_>) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected save failure".into()));
        }
        let encoded = encode_records(snapshot)?;
        let mut records = self.records.lock().unwrap();
        for (key, bytes) in encoded {
            records.insert(key, bytes);
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
