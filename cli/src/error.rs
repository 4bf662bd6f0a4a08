use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no mnemonic phrase given on the command line or stdin")]
    MissingPhrase,
}
