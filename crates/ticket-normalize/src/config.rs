//! Normalizer configuration.
//!
//! Loaded from a TOML file; every key is optional:
//!
//! ```toml
//! mappings_dir = "mappings"
//! auto_threshold = 0.9
//! suggest_threshold = 0.7
//! seed_vocabulary = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ticket_model::{DEFAULT_AUTO_THRESHOLD, DEFAULT_SUGGEST_THRESHOLD, Thresholds};
use ticket_store::{DEFAULT_MAPPINGS_DIR, StoreLayout};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Directory holding one mapping file per entity class.
    pub mappings_dir: PathBuf,
    /// Scores at or above this are mapped without review.
    pub auto_threshold: f64,
    /// Scores at or above this (and below `auto_threshold`) go to review.
    pub suggest_threshold: f64,
    /// Merge each class's initial vocabulary into its standardized set.
    pub seed_vocabulary: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            mappings_dir: PathBuf::from(DEFAULT_MAPPINGS_DIR),
            auto_threshold: DEFAULT_AUTO_THRESHOLD,
            suggest_threshold: DEFAULT_SUGGEST_THRESHOLD,
            seed_vocabulary: true,
        }
    }
}

impl NormalizerConfig {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents, path)?;
        tracing::debug!(path = %path.display(), "loaded normalizer config");
        Ok(config)
    }

    /// Validated threshold pair.
    pub fn thresholds(&self) -> Result<Thresholds> {
        Ok(Thresholds::new(self.auto_threshold, self.suggest_threshold)?)
    }

    pub fn layout(&self) -> StoreLayout {
        StoreLayout::new(&self.mappings_dir)
    }
}
