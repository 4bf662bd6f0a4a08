//! The three session records and their JSON codec.

use std::collections::HashSet;

use multiseed_types::{CoinType, Wallet};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::StoreError;

/// Ordered wallet records.
pub const WALLETS_KEY: &str = "wallets";
/// Words of the active phrase.
pub const MNEMONICS_KEY: &str = "mnemonics";
/// Coin type of each wallet, index-aligned with `wallets`.
pub const PATHS_KEY: &str = "paths";

pub const RECORD_KEYS: [&str; 3] = [WALLETS_KEY, MNEMONICS_KEY, PATHS_KEY];

/// Borrowed view of a session, built by the wallet store on every save.
#[derive(Serialize)]
pub struct SessionSnapshot<'a> {
    pub wallets: Vec<&'a Wallet>,
    pub mnemonics: Vec<&'a str>,
    pub paths: Vec<CoinType>,
}

impl SessionSnapshot<'_> {
    pub fn empty() -> Self {
        Self {
            wallets: Vec::new(),
            mnemonics: Vec::new(),
            paths: Vec::new(),
        }
    }
}

/// Owned session state read back from a backend.
pub struct SessionRecords {
    pub wallets: Vec<Wallet>,
    pub mnemonics: Zeroizing<Vec<String>>,
    pub paths: Vec<CoinType>,
}

impl SessionRecords {
    /// Check that the records describe one consistent session: `wallets` and
    /// `paths` line up entry for entry, no path is held twice, and every
    /// wallet was derived from the phrase in `mnemonics`.
    pub fn check_alignment(&self) -> Result<(), StoreError> {
        if self.wallets.len() != self.paths.len() {
            return Err(StoreError::Corruption(format!(
                "{} wallets but {} path entries",
                self.wallets.len(),
                self.paths.len()
            )));
        }
        let mut held = HashSet::with_capacity(self.wallets.len());
        for (i, (wallet, coin)) in self.wallets.iter().zip(&self.paths).enumerate() {
            let path = wallet
                .path()
                .map_err(|e| StoreError::Corruption(format!("wallet {i}: {e}")))?;
            if path.coin_type() != *coin {
                return Err(StoreError::Corruption(format!(
                    "wallet {i} was derived under coin {} but is recorded as {coin}",
                    path.coin_type()
                )));
            }
            if !held.insert(path) {
                return Err(StoreError::Corruption(format!(
                    "wallet {i} repeats derivation path {path}"
                )));
            }
        }
        if self.wallets.is_empty() {
            return Ok(());
        }
        if self.mnemonics.is_empty() {
            return Err(StoreError::Corruption(
                "wallets present without an active phrase".into(),
            ));
        }
        let phrase = Zeroizing::new(self.mnemonics.join(" "));
        if let Some(i) = self
            .wallets
            .iter()
            .position(|wallet| wallet.mnemonic() != phrase.as_str())
        {
            return Err(StoreError::Corruption(format!(
                "wallet {i} was derived from a different phrase"
            )));
        }
        Ok(())
    }
}

/// Serialize each record to its stored bytes, keyed as in [`RECORD_KEYS`].
pub fn encode_records(
    snapshot: &SessionSnapshot<'_>,
) -> Result<[(&'static str, Zeroizing<Vec<u8>>); 3], StoreError> {
    Ok([
        (WALLETS_KEY, to_json(&snapshot.wallets)?),
        (MNEMONICS_KEY, to_json(&snapshot.mnemonics)?),
        (PATHS_KEY, to_json(&snapshot.paths)?),
    ])
}

/// Rebuild a session from the three stored byte records.
pub fn decode_records(
    wallets: &[u8],
    mnemonics: &[u8],
    paths: &[u8],
) -> Result<SessionRecords, StoreError> {
    let records = SessionRecords {
        wallets: from_json(WALLETS_KEY, wallets)?,
        mnemonics: Zeroizing::new(from_json(MNEMONICS_KEY, mnemonics)?),
        paths: from_json(PATHS_KEY, paths)?,
    };
    records.check_alignment()?;
    Ok(records)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Zeroizing<Vec<u8>>, StoreError> {
    serde_json::to_vec(value)
        .map(Zeroizing::new)
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes)
        .map_err(|e| StoreError::Serialization(format!("record '{key}': {e}")))
}
