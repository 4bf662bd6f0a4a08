//! Subcommands and their execution.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Subcommand;
use zeroize::Zeroizing;

use multiseed_crypto::{generate_mnemonic_with, parse_mnemonic, OsEntropy, WordCount};
use multiseed_store_lmdb::LmdbWalletStore;
use multiseed_types::{CoinType, Wallet};
use multiseed_wallet_core::{derive_wallet, SensitiveField, WalletEntry, WalletStore};

use crate::config::CliConfig;
use crate::error::CliError;

const HIDDEN: &str = "(hidden)";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a fresh mnemonic phrase. Nothing is stored.
    Generate {
        /// Phrase length: 12 or 24 words.
        #[arg(long, default_value_t = 12, value_parser = parse_word_count)]
        words: usize,
    },

    /// Check a phrase against the wordlist and its checksum.
    Validate {
        /// Phrase words; read from stdin when omitted.
        phrase: Vec<String>,
    },

    /// Derive one wallet without touching the session.
    Derive {
        #[arg(long)]
        coin: Option<u32>,

        #[arg(long, default_value_t = 0)]
        index: u32,

        /// Also print the private key.
        #[arg(long)]
        reveal: bool,

        /// Phrase words; read from stdin when omitted.
        phrase: Vec<String>,
    },

    /// List the supported chains.
    Chains,

    /// Start a session with a freshly generated phrase.
    Create {
        #[arg(long)]
        coin: Option<u32>,
    },

    /// Add the next wallet from the session's phrase.
    Add {
        #[arg(long)]
        coin: Option<u32>,
    },

    /// Derive the next wallet from a supplied phrase and add it to the session.
    Import {
        #[arg(long)]
        coin: Option<u32>,

        /// Phrase words; read from stdin when omitted.
        phrase: Vec<String>,
    },

    /// Remove the wallet at a position.
    Remove { index: usize },

    /// Drop every wallet and the session phrase.
    Clear,

    /// Show the session's wallets.
    List {
        /// Show private keys and the phrase.
        #[arg(long)]
        reveal: bool,
    },
}

fn parse_word_count(s: &str) -> Result<usize, String> {
    match s {
        "12" => Ok(12),
        "24" => Ok(24),
        _ => Err(format!("expected 12 or 24, got {s}")),
    }
}

pub fn execute(
    command: Command,
    config: &CliConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Generate { words } => {
            let count = if words == 24 {
                WordCount::TwentyFour
            } else {
                WordCount::Twelve
            };
            let phrase = generate_mnemonic_with(&OsEntropy, count);
            writeln!(out, "{}", phrase.to_phrase_string().as_str())?;
        }
        Command::Validate { phrase } => {
            let text = read_phrase(phrase, input)?;
            let phrase = parse_mnemonic(&text)?;
            writeln!(out, "valid ({} words)", phrase.word_count())?;
        }
        Command::Derive {
            coin,
            index,
            reveal,
            phrase,
        } => {
            let text = read_phrase(phrase, input)?;
            let phrase = parse_mnemonic(&text)?;
            let coin = resolve_coin(coin, config);
            let (wallet, _) = derive_wallet(&phrase, coin, index)?;
            print_wallet(out, coin, &wallet, reveal, false)?;
        }
        Command::Chains => {
            for coin in CoinType::REGISTERED {
                let family = coin.family().map(|f| f.as_str()).unwrap_or_default();
                writeln!(out, "{:>4}  {:<10} {family}", coin.code(), coin.label())?;
            }
        }
        Command::Create { coin } => {
            let mut store = open_session(config)?;
            let coin = resolve_coin(coin, config);
            let wallet = store.create_with_new_phrase(coin)?;
            writeln!(out, "Write down this phrase; it is the only way to recover these wallets.")?;
            print_wallet(out, coin, wallet, false, true)?;
        }
        Command::Add { coin } => {
            let mut store = open_session(config)?;
            let coin = resolve_coin(coin, config);
            let wallet = store.add_next(coin)?;
            print_wallet(out, coin, wallet, false, false)?;
        }
        Command::Import { coin, phrase } => {
            let text = read_phrase(phrase, input)?;
            let mut store = open_session(config)?;
            let coin = resolve_coin(coin, config);
            let wallet = store.generate_next(coin, &text)?;
            print_wallet(out, coin, wallet, false, false)?;
        }
        Command::Remove { index } => {
            let mut store = open_session(config)?;
            store.remove(index)?;
            writeln!(out, "removed wallet {index}; {} remaining", store.len())?;
        }
        Command::Clear => {
            let mut store = open_session(config)?;
            store.clear()?;
            writeln!(out, "session cleared")?;
        }
        Command::List { reveal } => {
            let mut store = open_session(config)?;
            if reveal {
                for index in 0..store.len() {
                    store.toggle_visibility(index, SensitiveField::PrivateKey)?;
                    store.toggle_visibility(index, SensitiveField::Mnemonic)?;
                }
            }
            if store.is_empty() {
                writeln!(out, "no wallets")?;
            }
            for (position, entry) in store.entries().iter().enumerate() {
                write!(out, "[{position}] ")?;
                print_entry(out, entry)?;
            }
        }
    }
    Ok(())
}

fn open_session(config: &CliConfig) -> anyhow::Result<WalletStore<LmdbWalletStore>> {
    let backend = LmdbWalletStore::open(&config.data_dir, config.map_size).with_context(|| {
        format!("failed to open session store in {}", config.data_dir.display())
    })?;
    Ok(WalletStore::open(backend)?)
}

fn resolve_coin(coin: Option<u32>, config: &CliConfig) -> CoinType {
    coin.map(CoinType::new).unwrap_or(config.default_coin)
}

/// Join the phrase words from the command line, or read one line from `input`.
fn read_phrase(words: Vec<String>, input: &mut dyn BufRead) -> anyhow::Result<Zeroizing<String>> {
    let words = Zeroizing::new(words);
    if !words.is_empty() {
        return Ok(Zeroizing::new(words.join(" ")));
    }
    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut line)?;
    if line.trim().is_empty() {
        return Err(CliError::MissingPhrase.into());
    }
    Ok(line)
}

fn print_entry(out: &mut dyn Write, entry: &WalletEntry) -> std::io::Result<()> {
    let visibility = entry.visibility();
    print_wallet(
        out,
        entry.coin_type(),
        entry.wallet(),
        visibility.private_key,
        visibility.mnemonic,
    )
}

fn print_wallet(
    out: &mut dyn Write,
    coin: CoinType,
    wallet: &Wallet,
    show_private: bool,
    show_mnemonic: bool,
) -> std::io::Result<()> {
    writeln!(out, "{} {}", coin.label(), wallet.derivation_path())?;
    writeln!(out, "    address:  {}", wallet.public_key())?;
    let private = if show_private { wallet.private_key() } else { HIDDEN };
    writeln!(out, "    private:  {private}")?;
    let mnemonic = if show_mnemonic { wallet.mnemonic() } else { HIDDEN };
    writeln!(out, "    mnemonic: {mnemonic}")
}
