use std::path::PathBuf;

use thiserror::Error;
use ticket_model::ModelError;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Thresholds(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
