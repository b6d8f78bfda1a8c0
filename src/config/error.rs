//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Metadata loading and lookup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Metadata file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown field `{0}`")]
    UnknownField(String),
}
