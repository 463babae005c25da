//! Host-side configuration for the shim layer
//!
//! The host decides where stop words come from and which bindings the
//! pipeline cannot run without. Configuration is YAML or JSON.
//!
//! ```yaml
//! stop_words:
//!   source: file
//!   path: stopwords.txt
//! required_bindings:
//!   - capability: extract
//!     key: part_of_speech
//!     schema: ccp-token
//! ```

use crate::capability::{BindingKey, RegistryBuilder};
use crate::text::{init_stop_words, StopWordError, StopWordSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stop words: {0}")]
    StopWords(#[from] StopWordError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the stop-word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum StopWordSource {
    /// The list compiled into the crate
    #[default]
    BuiltIn,
    /// Words listed directly in the configuration
    Inline { words: Vec<String> },
    /// A word-per-line file
    File { path: PathBuf },
}

impl StopWordSource {
    pub fn load(&self) -> ConfigResult<StopWordSet> {
        Ok(match self {
            Self::BuiltIn => StopWordSet::builtin(),
            Self::Inline { words } => StopWordSet::from_words(words),
            Self::File { path } => StopWordSet::from_file(path)?,
        })
    }
}

/// Shim-layer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    pub stop_words: StopWordSource,
    /// Bindings checked eagerly when the registry is built
    pub required_bindings: Vec<BindingKey>,
}

impl ShimConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML.
    ///
    /// A relative stop-word file path is resolved against the config file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };

        if let StopWordSource::File { path: words_path } = &mut config.stop_words {
            if words_path.is_relative() {
                if let Some(dir) = path.parent() {
                    *words_path = dir.join(&*words_path);
                }
            }
        }
        tracing::debug!(config = %path.display(), "shim configuration loaded");
        Ok(config)
    }

    /// Add the configured requirements to a registry builder.
    pub fn apply(&self, builder: &mut RegistryBuilder) {
        builder.require_all(self.required_bindings.iter().cloned());
    }

    /// Load the configured stop-word set without installing it.
    pub fn stop_word_set(&self) -> ConfigResult<StopWordSet> {
        self.stop_words.load()
    }

    /// Load the configured set and install it process-wide.
    pub fn install_stop_words(&self) -> ConfigResult<()> {
        init_stop_words(self.stop_word_set()?)?;
        Ok(())
    }
}
