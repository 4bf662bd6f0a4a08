//! Shared utilities for multiseed.

pub mod logging;

pub use logging::{init_logging, LogFormat, ParseLogFormatError};
