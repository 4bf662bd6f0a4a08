//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use multiseed_types::CoinType;
use multiseed_utils::LogFormat;

use crate::error::CliError;

/// Configuration for the `multiseed` binary.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command line
/// flags and environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding the LMDB session database.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Coin type used when a command is given no `--coin`.
    #[serde(default = "default_coin")]
    pub default_coin: CoinType,

    /// LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./multiseed_data")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_coin() -> CoinType {
    CoinType::SOLANA
}

fn default_map_size() -> usize {
    multiseed_store_lmdb::environment::DEFAULT_MAP_SIZE
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            default_coin: default_coin(),
            map_size: default_map_size(),
        }
    }
}
