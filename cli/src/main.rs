//! multiseed: derive and manage multi-chain HD wallets from one phrase.

mod commands;
mod config;
mod error;

use clap::Parser;
use std::path::PathBuf;

use multiseed_types::CoinType;
use multiseed_utils::LogFormat;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "multiseed", version, about = "Multi-chain HD wallet derivation")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "MULTISEED_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the session database.
    #[arg(long, env = "MULTISEED_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log output format: "human" or "json".
    #[arg(long, env = "MULTISEED_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MULTISEED_LOG_LEVEL")]
    log_level: Option<String>,

    /// Coin type used when a command is given no --coin (501, 60 or 56).
    #[arg(long, env = "MULTISEED_DEFAULT_COIN")]
    default_coin: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// File config (or defaults) with flag and env overrides applied.
    fn resolve_config(&self) -> anyhow::Result<CliConfig> {
        let base = match &self.config {
            Some(path) => CliConfig::from_toml_file(path)?,
            None => CliConfig::default(),
        };
        Ok(CliConfig {
            data_dir: self.data_dir.clone().unwrap_or(base.data_dir),
            log_format: self.log_format.unwrap_or(base.log_format),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            default_coin: self
                .default_coin
                .map(CoinType::new)
                .unwrap_or(base.default_coin),
            ..base
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    multiseed_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loaded config file");
    }
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        default_coin = %config.default_coin,
        "resolved configuration"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    commands::execute(cli.command, &config, &mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("multiseed.toml");
        std::fs::write(&path, "default_coin = 60\nlog_level = \"info\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "multiseed",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "debug",
            "chains",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.default_coin, CoinType::ETHEREUM);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["multiseed", "derive", "--coin", "56", "--index", "2"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Derive {
                coin: Some(56),
                index: 2,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["multiseed", "generate", "--words", "15"]).is_err());
        assert!(Cli::try_parse_from(["multiseed", "--log-format", "xml", "chains"]).is_err());
    }
}
