//! phrase → seed → path → key material → chain keypair → [`Wallet`].

use multiseed_crypto::{derive_key_material, to_seed, ChainAdapter, ChainKeyAdapter, Phrase};
use multiseed_types::{CoinType, DerivationPath, Wallet};

use crate::error::WalletError;

/// Derive the wallet at `m/44'/{coin_type}'/0'/{index}'` of `phrase`.
///
/// The coin is checked against the registry before any key work, so an
/// unsupported chain costs nothing and yields no partial wallet.
pub fn derive_wallet(
    phrase: &Phrase,
    coin_type: CoinType,
    index: u32,
) -> Result<(Wallet, DerivationPath), WalletError> {
    let adapter = ChainAdapter::for_coin(coin_type)?;
    let seed = to_seed(phrase);
    let material = derive_key_material(&seed, coin_type, index)?;
    let keys = adapter.encode(&material)?;

    let path = *material.path();
    let mnemonic = phrase.to_phrase_string();
    let wallet = Wallet::new(
        keys.public,
        (*keys.private).clone(),
        (*mnemonic).clone(),
        &path,
    );
    Ok((wallet, path))
}
