//! Pipeline configuration
//!
//! Every section has defaults, so an empty TOML document is a valid
//! configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Sentence identifier model; the first sentence gets its successor
    pub const SID_MODEL: &str = "S000000";

    /// Maximum sentence length in characters (0 = unbounded)
    pub const SENTENCE_LIMIT: usize = 0;
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    #[serde(default)]
    pub postprocess: PostprocessOptions,

    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Sentence segmentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Map look-alike dashes and quotes and bullet artifacts before scanning
    pub replace: bool,

    /// Maximum sentence length in characters (0 = unbounded)
    pub limit: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            replace: true,
            limit: defaults::SENTENCE_LIMIT,
        }
    }
}

/// Sentence tokenization options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Keep itemize prompts such as `a)` or `(iv)` as one token
    pub preserve: bool,

    /// Repair paired punctuation and the sentence-final mark
    pub match_pairs: bool,

    /// Drop headline and dateline prefixes
    pub trim: bool,

    /// Sentence identifier model
    pub sid_model: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            preserve: true,
            match_pairs: true,
            trim: true,
            sid_model: defaults::SID_MODEL.to_string(),
        }
    }
}

/// Which fields post-processing may rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostprocessOptions {
    pub lemma: bool,
    pub feats: bool,
}

impl Default for PostprocessOptions {
    fn default() -> Self {
        Self {
            lemma: true,
            feats: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PipelineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PipelineConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.sid_model.is_empty() {
            return Err(Error::Config("tokenizer.sid_model must not be empty".into()));
        }

        if !self.postprocess.lemma && !self.postprocess.feats {
            return Err(Error::Config(
                "postprocess must correct lemmas, features or both".into(),
            ));
        }

        Ok(())
    }
}
