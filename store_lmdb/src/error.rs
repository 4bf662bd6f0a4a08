use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("incomplete session: record '{0}' is missing")]
    MissingRecord(&'static str),
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        LmdbError::Heed(e.to_string())
    }
}

impl From<LmdbError> for multiseed_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match e {
            LmdbError::MissingRecord(_) => multiseed_store::StoreError::Corruption(e.to_string()),
            other => multiseed_store::StoreError::Backend(other.to_string()),
        }
    }
}
