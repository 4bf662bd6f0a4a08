//! The ordered wallet collection.
//!
//! Each entry bundles a [`Wallet`] with its metadata, so inserting or removing
//! a wallet moves its coin type and visibility flags with it in the same
//! `Vec` operation.

use multiseed_types::{CoinType, DerivationPath, Wallet};

use crate::error::WalletError;

/// A wallet field that is hidden until the user reveals it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensitiveField {
    PrivateKey,
    Mnemonic,
}

/// Per-wallet reveal flags. Both start hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub private_key: bool,
    pub mnemonic: bool,
}

impl Visibility {
    pub fn is_visible(&self, field: SensitiveField) -> bool {
        match field {
            SensitiveField::PrivateKey => self.private_key,
            SensitiveField::Mnemonic => self.mnemonic,
        }
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, field: SensitiveField) -> bool {
        let flag = match field {
            SensitiveField::PrivateKey => &mut self.private_key,
            SensitiveField::Mnemonic => &mut self.mnemonic,
        };
        *flag = !*flag;
        *flag
    }
}

/// One wallet plus the metadata that travels with it.
#[derive(Debug)]
pub struct WalletEntry {
    wallet: Wallet,
    path: DerivationPath,
    visibility: Visibility,
}

impl WalletEntry {
    pub(crate) fn new(wallet: Wallet, path: DerivationPath) -> Self {
        Self {
            wallet,
            path,
            visibility: Visibility::default(),
        }
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn coin_type(&self) -> CoinType {
        self.path.coin_type()
    }

    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    pub fn address_index(&self) -> u32 {
        self.path.address_index()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Externally visible session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No wallets. A chain may have been selected.
    Empty,
    /// At least one wallet.
    Populated,
}

#[derive(Debug, Default)]
pub struct WalletCollection {
    entries: Vec<WalletEntry>,
}

impl WalletCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.entries.is_empty() {
            Phase::Empty
        } else {
            Phase::Populated
        }
    }

    pub fn get(&self, index: usize) -> Option<&WalletEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[WalletEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WalletEntry> {
        self.entries.iter()
    }

    /// Next address index under `coin_type`: one past the highest index held,
    /// or 0 when the coin has no wallets.
    pub fn next_index(&self, coin_type: CoinType) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.coin_type() == coin_type)
            .map(|entry| entry.address_index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Append an entry and return its position.
    pub(crate) fn push(&mut self, entry: WalletEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<WalletEntry, WalletError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub(crate) fn toggle_visibility(
        &mut self,
        index: usize,
        field: SensitiveField,
    ) -> Result<bool, WalletError> {
        self.check_index(index)?;
        Ok(self.entries[index].visibility.toggle(field))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), WalletError> {
        if index >= self.entries.len() {
            return Err(WalletError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a WalletCollection {
    type Item = &'a WalletEntry;
    type IntoIter = std::slice::Iter<'a, WalletEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(coin: CoinType, index: u32) -> WalletEntry {
        let path = DerivationPath::new(coin, index).unwrap();
        let wallet = Wallet::new(
            format!("pub-{coin}-{index}"),
            "priv".into(),
            "words".into(),
            &path,
        );
        WalletEntry::new(wallet, path)
    }

    #[test]
    fn next_index_is_per_coin() {
        let mut c = WalletCollection::new();
        assert_eq!(c.next_index(CoinType::SOLANA), 0);
        c.push(entry(CoinType::SOLANA, 0));
        c.push(entry(CoinType::ETHEREUM, 0));
        c.push(entry(CoinType::SOLANA, 1));
        assert_eq!(c.next_index(CoinType::SOLANA), 2);
        assert_eq!(c.next_index(CoinType::ETHEREUM), 1);
        assert_eq!(c.next_index(CoinType::BSC), 0);
    }

    #[test]
    fn next_index_skips_past_gaps() {
        let mut c = WalletCollection::new();
        c.push(entry(CoinType::SOLANA, 0));
        c.push(entry(CoinType::SOLANA, 1));
        c.push(entry(CoinType::SOLANA, 2));
        c.remove(0).unwrap();
        assert_eq!(c.next_index(CoinType::SOLANA), 3);
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut c = WalletCollection::new();
        for i in 0..3 {
            c.push(entry(CoinType::SOLANA, i));
        }
        c.toggle_visibility(2, SensitiveField::Mnemonic).unwrap();
        let removed = c.remove(1).unwrap();
        assert_eq!(removed.address_index(), 1);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1).unwrap().address_index(), 2);
        assert!(c.get(1).unwrap().visibility().mnemonic);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut c = WalletCollection::new();
        c.push(entry(CoinType::BSC, 0));
        assert!(matches!(
            c.remove(1),
            Err(WalletError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            c.toggle_visibility(3, SensitiveField::PrivateKey),
            Err(WalletError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn toggle_flips_one_flag() {
        let mut c = WalletCollection::new();
        c.push(entry(CoinType::SOLANA, 0));
        assert!(c.toggle_visibility(0, SensitiveField::PrivateKey).unwrap());
        let v = c.get(0).unwrap().visibility();
        assert!(v.private_key);
        assert!(!v.mnemonic);
        assert!(!c.toggle_visibility(0, SensitiveField::PrivateKey).unwrap());
    }

    #[test]
    fn phase_follows_contents() {
        let mut c = WalletCollection::new();
        assert_eq!(c.phase(), Phase::Empty);
        c.push(entry(CoinType::SOLANA, 0));
        assert_eq!(c.phase(), Phase::Populated);
        c.clear();
        assert_eq!(c.phase(), Phase::Empty);
    }
}
