//! Integration tests exercising the full session pipeline:
//! phrase → derivation → collection → persistence → reopen.
//!
//! These tests wire the wallet store to both the in-memory nullable and the
//! LMDB backend.

use multiseed_nullables::NullPersistence;
use multiseed_store::{StoreError, WalletPersistence, MNEMONICS_KEY, PATHS_KEY, WALLETS_KEY};
use multiseed_store_lmdb::LmdbWalletStore;
use multiseed_types::CoinType;
use multiseed_wallet_core::{Phase, SensitiveField, WalletError, WalletStore};

const PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn null_store() -> WalletStore<NullPersistence> {
    WalletStore::new(NullPersistence::new())
}

fn temp_lmdb() -> (tempfile::TempDir, LmdbWalletStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LmdbWalletStore::open(dir.path(), 16 * 1024 * 1024).expect("open store");
    (dir, store)
}

fn public_keys<P: WalletPersistence>(store: &WalletStore<P>) -> Vec<String> {
    store.wallets().map(|w| w.public_key().to_string()).collect()
}

fn assert_aligned<P: WalletPersistence>(store: &WalletStore<P>) {
    for entry in store.entries() {
        let path = entry.wallet().path().expect("stored path parses");
        assert_eq!(path, *entry.path());
        assert_eq!(path.coin_type(), entry.coin_type());
    }
}

// ---------------------------------------------------------------------------
// 1. Pinned fixtures and determinism
// ---------------------------------------------------------------------------

#[test]
fn first_solana_wallet_matches_reference() {
    let mut store = null_store();
    let wallet = store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    assert_eq!(wallet.public_key(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
    assert_eq!(wallet.derivation_path(), "m/44'/501'/0'/0'");
    assert_eq!(wallet.mnemonic(), PHRASE);
}

#[test]
fn first_ethereum_wallet_matches_reference() {
    let mut store = null_store();
    let wallet = store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    assert_eq!(wallet.public_key(), "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
    assert_eq!(wallet.derivation_path(), "m/44'/60'/0'/0'");
}

#[test]
fn separate_sessions_derive_identical_wallets() {
    let mut a = null_store();
    let mut b = null_store();
    for _ in 0..3 {
        a.generate_next(CoinType::SOLANA, PHRASE).unwrap();
        b.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    }
    assert_eq!(public_keys(&a), public_keys(&b));
}

// ---------------------------------------------------------------------------
// 2. Index policy
// ---------------------------------------------------------------------------

#[test]
fn indices_increase_per_coin() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.generate_next(CoinType::BSC, PHRASE).unwrap();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();

    let solana: Vec<u32> = store
        .entries()
        .iter()
        .filter(|e| e.coin_type() == CoinType::SOLANA)
        .map(|e| e.address_index())
        .collect();
    assert_eq!(solana, vec![0, 1, 2]);
    assert_eq!(store.get(1).unwrap().address_index(), 0);
    assert_eq!(store.get(3).unwrap().address_index(), 0);
    assert_eq!(
        store.get(4).unwrap().wallet().public_key(),
        "9RYreF1nBs8Gvq94ACMBtVSVAVUBKSB9p6xdJBFyGApo"
    );
    assert_aligned(&store);
}

#[test]
fn removal_never_reissues_a_held_path() {
    let mut store = null_store();
    for _ in 0..3 {
        store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    }
    store.remove(0).unwrap();
    let next = store.add_next(CoinType::ETHEREUM).unwrap();
    assert_eq!(next.derivation_path(), "m/44'/60'/0'/3'");

    let mut paths: Vec<String> = store
        .wallets()
        .map(|w| w.derivation_path().to_string())
        .collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), store.len());
}

// ---------------------------------------------------------------------------
// 3. Failure leaves the collection unchanged
// ---------------------------------------------------------------------------

#[test]
fn unsupported_chain_leaves_collection_empty() {
    let mut store = null_store();
    let err = store.generate_next(CoinType::new(9999), PHRASE).unwrap_err();
    assert!(matches!(err, WalletError::UnsupportedChain(c) if c.code() == 9999));
    assert!(store.is_empty());
    assert_eq!(store.phase(), Phase::Empty);
    assert_eq!(store.persistence().save_count(), 0);
}

#[test]
fn invalid_mnemonic_leaves_collection_unchanged() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    let swapped = PHRASE.replace("about", "abandon");
    assert!(matches!(
        store.generate_next(CoinType::SOLANA, &swapped),
        Err(WalletError::InvalidMnemonic(_))
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn out_of_range_operations_fail_cleanly() {
    let mut store = null_store();
    store.generate_next(CoinType::BSC, PHRASE).unwrap();
    assert!(matches!(
        store.remove(1),
        Err(WalletError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        store.toggle_visibility(4, SensitiveField::PrivateKey),
        Err(WalletError::IndexOutOfRange { .. })
    ));
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// 4. Collection invariant under removal
// ---------------------------------------------------------------------------

#[test]
fn remove_middle_of_three_shifts_metadata_with_wallet() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    store.generate_next(CoinType::BSC, PHRASE).unwrap();
    store.toggle_visibility(2, SensitiveField::PrivateKey).unwrap();
    let third = store.get(2).unwrap().wallet().public_key().to_string();

    store.remove(1).unwrap();

    assert_eq!(store.len(), 2);
    let moved = store.get(1).unwrap();
    assert_eq!(moved.wallet().public_key(), third);
    assert_eq!(moved.coin_type(), CoinType::BSC);
    assert!(moved.visibility().private_key);
    assert!(!store.get(0).unwrap().visibility().private_key);
    assert_aligned(&store);
}

#[test]
fn removing_every_wallet_returns_to_empty() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    assert_eq!(store.phase(), Phase::Populated);
    store.remove(1).unwrap();
    store.remove(0).unwrap();
    assert_eq!(store.phase(), Phase::Empty);
}

// ---------------------------------------------------------------------------
// 5. Persistence
// ---------------------------------------------------------------------------

#[test]
fn every_mutation_is_saved() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.add_next(CoinType::ETHEREUM).unwrap();
    store.remove(0).unwrap();
    store.clear().unwrap();
    assert_eq!(store.persistence().save_count(), 4);
    assert_eq!(
        store.persistence().raw_record(WALLETS_KEY).unwrap(),
        b"[]".to_vec()
    );
    assert_eq!(
        store.persistence().raw_record(MNEMONICS_KEY).unwrap(),
        b"[]".to_vec()
    );
}

#[test]
fn save_failure_is_surfaced_and_memory_stays_authoritative() {
    let mut store = null_store();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    store.persistence().fail_saves(true);

    let err = store.add_next(CoinType::SOLANA).unwrap_err();
    assert!(matches!(err, WalletError::Persistence(StoreError::Backend(_))));
    assert_eq!(store.len(), 2);

    store.persistence().fail_saves(false);
    store.remove(0).unwrap();
    let persisted = store.persistence().load().unwrap().unwrap();
    assert_eq!(persisted.wallets.len(), 1);
    assert_eq!(persisted.wallets[0].derivation_path(), "m/44'/501'/0'/1'");
}

#[test]
fn session_reopens_from_nullable() {
    let mut store = null_store();
    store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    let keys = public_keys(&store);

    let persistence = NullPersistence::new();
    persistence
        .save(&multiseed_store::SessionSnapshot {
            wallets: store.wallets().collect(),
            mnemonics: store.active_words().unwrap(),
            paths: store.entries().iter().map(|e| e.coin_type()).collect(),
        })
        .unwrap();

    let mut reopened = WalletStore::open(persistence).unwrap();
    assert_eq!(public_keys(&reopened), keys);
    assert_eq!(reopened.phase(), Phase::Populated);
    let next = reopened.add_next(CoinType::ETHEREUM).unwrap();
    assert_eq!(next.public_key(), "0x1dF8F7fb55E3002285Fa4D987B74e450bF8c6588");
}

#[test]
fn corrupt_paths_record_fails_open() {
    let persistence = NullPersistence::new();
    {
        let mut store = WalletStore::new(&persistence);
        store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    }
    persistence.put_raw(PATHS_KEY, b"[60]");
    assert!(matches!(
        WalletStore::open(&persistence),
        Err(WalletError::Persistence(StoreError::Corruption(_)))
    ));
}

#[test]
fn phrase_record_from_another_mnemonic_fails_open() {
    let persistence = NullPersistence::new();
    {
        let mut store = WalletStore::new(&persistence);
        store.generate_next(CoinType::SOLANA, PHRASE).unwrap();
    }
    persistence.put_raw(
        MNEMONICS_KEY,
        br#"["legal","winner","thank","year","wave","sausage","worth","useful","legal","winner","thank","yellow"]"#,
    );
    assert!(matches!(
        WalletStore::open(&persistence),
        Err(WalletError::Persistence(StoreError::Corruption(_)))
    ));
}

#[test]
fn duplicated_wallet_record_fails_open() {
    let mut store = null_store();
    store.generate_next(CoinType::ETHEREUM, PHRASE).unwrap();
    let wallet = store.get(0).unwrap().wallet();

    let persistence = NullPersistence::new();
    persistence
        .save(&multiseed_store::SessionSnapshot {
            wallets: vec![wallet, wallet],
            mnemonics: store.active_words().unwrap(),
            paths: vec![CoinType::ETHEREUM, CoinType::ETHEREUM],
        })
        .unwrap();
    assert!(matches!(
        WalletStore::open(&persistence),
        Err(WalletError::Persistence(StoreError::Corruption(_)))
    ));
}

#[test]
fn lmdb_session_survives_reopen() {
    let (dir, lmdb) = temp_lmdb();
    {
        let mut store = WalletStore::open(lmdb).unwrap();
        store.generate_next(CoinType::BSC, PHRASE).unwrap();
        store.add_next(CoinType::BSC).unwrap();
        store.toggle_visibility(0, SensitiveField::Mnemonic).unwrap();
    }

    let lmdb = LmdbWalletStore::open(dir.path(), 16 * 1024 * 1024).unwrap();
    let store = WalletStore::open(lmdb).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        store.get(0).unwrap().wallet().public_key(),
        "0xa06d780eE3159e3849BF3a428969aF21a7e1FcA6"
    );
    assert_eq!(
        store.get(1).unwrap().wallet().public_key(),
        "0xFBB43e19f078f2f8a63909D53b998a3770432316"
    );
    assert!(!store.get(0).unwrap().visibility().mnemonic);
    assert_eq!(store.selected_chain(), Some(CoinType::BSC));
    assert_eq!(store.active_words().unwrap().join(" "), PHRASE);
}
