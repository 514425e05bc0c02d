//! Engine configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GroupError, GroupResult};

/// Default minimum accumulated overlap score for two documents to group.
pub const DEFAULT_SIM_THRESHOLD: f64 = 5.0;

/// Default minimum number of distinct terms for a document to be indexed.
pub const DEFAULT_MIN_DOCUMENT_LENGTH: usize = 3;

/// Clustering parameters.
///
/// ```toml
/// sim_threshold = 0.4
/// min_document_length = 3
///
/// [tokenizer]
/// extra_stop_words = ["please", "thanks"]
/// stemming = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterConfig {
    /// Minimum accumulated weighted-overlap score (inclusive).
    pub sim_threshold: f64,
    /// Minimum distinct post-filter term count.
    pub min_document_length: usize,
    /// Tokenizer options.
    pub tokenizer: TokenizerConfig,
}

/// Tokenizer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Stop words added on top of the built-in English list.
    pub extra_stop_words: Vec<String>,
    /// Apply the English stemmer to each surviving token.
    pub stemming: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            sim_threshold: DEFAULT_SIM_THRESHOLD,
            min_document_length: DEFAULT_MIN_DOCUMENT_LENGTH,
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            stemming: true,
        }
    }
}

impl ClusterConfig {
    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> GroupResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> GroupResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builder-style threshold override.
    pub fn with_threshold(mut self, sim_threshold: f64) -> Self {
        self.sim_threshold = sim_threshold;
        self
    }

    /// Builder-style minimum length override.
    pub fn with_min_document_length(mut self, min_document_length: usize) -> Self {
        self.min_document_length = min_document_length;
        self
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> GroupResult<()> {
        if !self.sim_threshold.is_finite() {
            return Err(GroupError::InvalidParameter {
                name: "sim_threshold",
                message: format!("must be finite, got {}", self.sim_threshold),
            });
        }
        Ok(())
    }
}
