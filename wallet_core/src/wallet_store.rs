//! The session wallet store.
//!
//! ```text
//!            select_chain
//!   ┌───────┐ ─────────┐   generate_next / create_with_new_phrase
//!   │ Empty │ ◄────────┘ ──────────────────────────────────────┐
//!   └───────┘                                                   ▼
//!       ▲            clear, remove(last)               ┌───────────┐
//!       └──────────────────────────────────────────────│ Populated │ ◄─┐ add_next,
//!                                                      └───────────┘ ──┘ remove
//! ```
//!
//! Every successful mutation is followed by a synchronous save of the whole
//! session. The in-memory collection is authoritative: when the save fails the
//! mutation stays applied and the error is returned as
//! [`WalletError::Persistence`].

use multiseed_crypto::{
    generate_mnemonic_with, parse_mnemonic, EntropySource, OsEntropy, Phrase, WordCount,
};
use multiseed_store::{SessionRecords, SessionSnapshot, StoreError, WalletPersistence};
use multiseed_types::{CoinType, Wallet};

use crate::collection::{Phase, SensitiveField, WalletCollection, WalletEntry};
use crate::error::WalletError;
use crate::pipeline::derive_wallet;

pub struct WalletStore<P: WalletPersistence> {
    collection: WalletCollection,
    active: Option<Phrase>,
    selected: Option<CoinType>,
    persistence: P,
}

impl<P: WalletPersistence> WalletStore<P> {
    /// An empty session that saves through `persistence`. Nothing is loaded.
    pub fn new(persistence: P) -> Self {
        Self {
            collection: WalletCollection::new(),
            active: None,
            selected: None,
            persistence,
        }
    }

    /// Restore the last saved session, or start empty if none exists.
    pub fn open(persistence: P) -> Result<Self, WalletError> {
        let mut store = Self::new(persistence);
        if let Some(records) = store.persistence.load()? {
            store.restore(records)?;
            tracing::info!(
                wallets = store.collection.len(),
                "restored wallet session"
            );
        }
        Ok(store)
    }

    fn restore(&mut self, records: SessionRecords) -> Result<(), WalletError> {
        records.check_alignment()?;
        if !records.mnemonics.is_empty() {
            let text = zeroize::Zeroizing::new(records.mnemonics.join(" "));
            let phrase = parse_mnemonic(&text).map_err(|e| {
                StoreError::Corruption(format!("stored phrase does not validate: {e}"))
            })?;
            self.active = Some(phrase);
        }
        let SessionRecords { wallets, .. } = records;
        for wallet in wallets {
            let path = wallet
                .path()
                .map_err(|e| StoreError::Corruption(e.to_string()))?;
            self.selected = Some(path.coin_type());
            self.collection.push(WalletEntry::new(wallet, path));
        }
        Ok(())
    }

    /// Choose the chain for a session that has no wallets yet.
    pub fn select_chain(&mut self, coin_type: CoinType) -> Result<(), WalletError> {
        if !coin_type.is_supported() {
            return Err(WalletError::UnsupportedChain(coin_type));
        }
        if self.phase() == Phase::Populated {
            return Err(WalletError::SessionPopulated);
        }
        tracing::debug!(coin = %coin_type, chain = coin_type.label(), "selected chain");
        self.selected = Some(coin_type);
        Ok(())
    }

    /// Derive the next wallet under `coin_type` from `mnemonic` and append it.
    ///
    /// While the session is populated, `mnemonic` must be the active phrase.
    /// On any derivation error the collection is left unchanged.
    pub fn generate_next(
        &mut self,
        coin_type: CoinType,
        mnemonic: &str,
    ) -> Result<&Wallet, WalletError> {
        let phrase = parse_mnemonic(mnemonic)?;
        if self.phase() == Phase::Populated && self.active.as_ref() != Some(&phrase) {
            return Err(WalletError::MnemonicMismatch);
        }
        self.append(coin_type, Some(phrase))
    }

    /// Start a session from a freshly generated 12-word phrase.
    pub fn create_with_new_phrase(&mut self, coin_type: CoinType) -> Result<&Wallet, WalletError> {
        self.create_with_entropy(coin_type, &OsEntropy)
    }

    /// [`Self::create_with_new_phrase`] drawing entropy from `source`.
    pub fn create_with_entropy(
        &mut self,
        coin_type: CoinType,
        source: &dyn EntropySource,
    ) -> Result<&Wallet, WalletError> {
        if self.phase() == Phase::Populated {
            return Err(WalletError::SessionPopulated);
        }
        if !coin_type.is_supported() {
            return Err(WalletError::UnsupportedChain(coin_type));
        }
        let phrase = generate_mnemonic_with(source, WordCount::Twelve);
        self.append(coin_type, Some(phrase))
    }

    /// Derive the next wallet under `coin_type` from the active phrase.
    pub fn add_next(&mut self, coin_type: CoinType) -> Result<&Wallet, WalletError> {
        self.append(coin_type, None)
    }

    /// Derive from `phrase`, which then becomes the active phrase, or from the
    /// active phrase when `phrase` is `None`.
    fn append(
        &mut self,
        coin_type: CoinType,
        phrase: Option<Phrase>,
    ) -> Result<&Wallet, WalletError> {
        let index = self.collection.next_index(coin_type);
        let source = match &phrase {
            Some(phrase) => phrase,
            None => self.active.as_ref().ok_or(WalletError::NoActiveMnemonic)?,
        };
        let (wallet, path) = derive_wallet(source, coin_type, index)?;

        let position = self.collection.push(WalletEntry::new(wallet, path));
        if let Some(phrase) = phrase {
            self.active = Some(phrase);
        }
        self.selected = Some(coin_type);
        tracing::info!(
            coin = %coin_type,
            chain = coin_type.label(),
            path = %path,
            position,
            "derived wallet"
        );

        self.persist()?;
        Ok(self.collection.entries()[position].wallet())
    }

    /// Remove the wallet at `index`; later wallets shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<(), WalletError> {
        let removed = self.collection.remove(index)?;
        tracing::info!(
            index,
            path = %removed.path(),
            remaining = self.collection.len(),
            "removed wallet"
        );
        self.persist()
    }

    /// Drop every wallet, the active phrase and the chain selection.
    pub fn clear(&mut self) -> Result<(), WalletError> {
        let cleared = self.collection.len();
        self.collection.clear();
        self.active = None;
        self.selected = None;
        tracing::info!(cleared, "cleared wallet session");
        self.persist()
    }

    /// Flip a reveal flag and return its new value. Flags are not persisted.
    pub fn toggle_visibility(
        &mut self,
        index: usize,
        field: SensitiveField,
    ) -> Result<bool, WalletError> {
        self.collection.toggle_visibility(index, field)
    }

    fn persist(&self) -> Result<(), WalletError> {
        let snapshot = SessionSnapshot {
            wallets: self.collection.iter().map(WalletEntry::wallet).collect(),
            mnemonics: self
                .active
                .as_ref()
                .map(Phrase::words)
                .unwrap_or_default(),
            paths: self.collection.iter().map(WalletEntry::coin_type).collect(),
        };
        self.persistence.save(&snapshot).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist wallet session");
            WalletError::Persistence(e)
        })
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.collection.phase()
    }

    pub fn get(&self, index: usize) -> Option<&WalletEntry> {
        self.collection.get(index)
    }

    pub fn entries(&self) -> &[WalletEntry] {
        self.collection.entries()
    }

    pub fn wallets(&self) -> impl Iterator<Item = &Wallet> + '_ {
        self.collection.iter().map(WalletEntry::wallet)
    }

    /// Words of the active phrase. Treat as secret.
    pub fn active_words(&self) -> Option<Vec<&'static str>> {
        self.active.as_ref().map(Phrase::words)
    }

    pub fn selected_chain(&self) -> Option<CoinType> {
        self.selected
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}
