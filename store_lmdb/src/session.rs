//! LMDB implementation of WalletPersistence.

use std::path::Path;
use std::sync::Arc;

use heed::types::{Bytes, Str};
use heed::{Database, Env};

use multiseed_store::{
    decode_records, encode_records, SessionRecords, SessionSnapshot, StoreError,
    WalletPersistence, MNEMONICS_KEY, PATHS_KEY, WALLETS_KEY,
};

use crate::environment::LmdbEnvironment;
use crate::LmdbError;

const SESSION_DB: &str = "session";

pub struct LmdbWalletStore {
    pub(crate) env: Arc<Env>,
    pub(crate) session_db: Database<Str, Bytes>,
}

impl LmdbWalletStore {
    /// Open (creating if needed) the session database in `path`.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        let environment = LmdbEnvironment::open(path, map_size)?;
        Self::from_environment(&environment)
    }

    pub fn from_environment(environment: &LmdbEnvironment) -> Result<Self, LmdbError> {
        let env = Arc::clone(environment.env());
        let mut wtxn = env.write_txn()?;
        let session_db = env.create_database(&mut wtxn, Some(SESSION_DB))?;
        wtxn.commit()?;
        Ok(Self { env, session_db })
    }
}

impl WalletPersistence for LmdbWalletStore {
    fn load(&self) -> Result<Option<SessionRecords>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let wallets = self
            .session_db
            .get(&rtxn, WALLETS_KEY)
            .map_err(LmdbError::from)?;
        let mnemonics = self
            .session_db
            .get(&rtxn, MNEMONICS_KEY)
            .map_err(LmdbError::from)?;
        let paths = self
            .session_db
            .get(&rtxn, PATHS_KEY)
            .map_err(LmdbError::from)?;

        match (wallets, mnemonics, paths) {
            (None, None, None) => Ok(None),
            (Some(w), Some(m), Some(p)) => {
                let records = decode_records(w, m, p)?;
                tracing::debug!(wallets = records.wallets.len(), "loaded session from LMDB");
                Ok(Some(records))
            }
            (w, m, _) => {
                let missing = if w.is_none() {
                    WALLETS_KEY
                } else if m.is_none() {
                    MNEMONICS_KEY
                } else {
                    PATHS_KEY
                };
                Err(LmdbError::MissingRecord(missing).into())
            }
        }
    }

    fn save(&self, snapshot: &SessionSnapshot<'_>) -> Result<(), StoreError> {
        let records = encode_records(snapshot)?;
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        for (key, bytes) in records.iter() {
            self.session_db
                .put(&mut wtxn, *key, bytes.as_slice())
                .map_err(LmdbError::from)?;
        }
        wtxn.commit().map_err(LmdbError::from)?;
        tracing::trace!(wallets = snapshot.wallets.len(), "saved session to LMDB");
        Ok(())
    }
}
