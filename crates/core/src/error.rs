//! Error type shared by the hookguard library.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// Standard input was not a JSON document.
    #[error("{0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("failed to read hook input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("unknown hook '{0}'")]
    UnknownHook(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
