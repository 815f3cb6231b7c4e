//! Digest configuration.
//!
//! Every section has defaults, so an empty JSON object is a complete config.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "sentences": 4,
//!   "summarizer": { "smoothing": 0.4, "min_dimensions": 3, "reduction_ratio": 1.0 },
//!   "themes": { "top_n": 5, "min_word_chars": 4, "exclude_stop_words": false },
//!   "corpus": { "cache": true },
//!   "strict": false
//! }
//! ```

pub mod errors;
pub mod validation;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{DigestError, Result};
use crate::nlp::corpus::{BundledCorpus, CachedCorpus, CorpusProvider};
use validation::{ValidationEngine, ValidationReport};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Total summary sentence budget; one slot goes to the sentiment/theme
    /// header, the rest to extracted sentences.
    #[serde(default = "default_sentences")]
    pub sentences: usize,

    #[serde(default)]
    pub summarizer: LsaConfig,

    #[serde(default)]
    pub themes: ThemeConfig,

    #[serde(default)]
    pub corpus: CorpusConfig,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// LSA ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LsaConfig {
    /// Term-frequency smoothing, in `[0, 1)`
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Lower bound on kept singular values
    #[serde(default = "default_min_dimensions")]
    pub min_dimensions: usize,

    /// Fraction of singular values kept, in `(0, 1]`
    #[serde(default = "default_reduction_ratio")]
    pub reduction_ratio: f64,

    /// Stopword language for the term dictionary; `None` keeps every word.
    #[serde(default)]
    pub stop_words: Option<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Theme extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Number of themes listed
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Words shorter than this many characters are ignored
    #[serde(default = "default_min_word_chars")]
    pub min_word_chars: usize,

    #[serde(default)]
    pub exclude_stop_words: bool,

    #[serde(default = "default_language")]
    pub stop_words_language: String,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Where the tokenizer corpus comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Keep a copy on disk; `false` always uses the bundled corpus.
    #[serde(default = "default_true")]
    pub cache: bool,

    /// Cache directory; defaults to the platform cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_sentences() -> usize {
    crate::batch::SUMMARY_SENTENCES
}

fn default_smoothing() -> f64 {
    0.4
}

fn default_min_dimensions() -> usize {
    3
}

fn default_reduction_ratio() -> f64 {
    1.0
}

fn default_top_n() -> usize {
    5
}

fn default_min_word_chars() -> usize {
    4
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            sentences: default_sentences(),
            summarizer: LsaConfig::default(),
            themes: ThemeConfig::default(),
            corpus: CorpusConfig::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl Default for LsaConfig {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            min_dimensions: default_min_dimensions(),
            reduction_ratio: default_reduction_ratio(),
            stop_words: None,
            unknown_fields: HashMap::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_word_chars: default_min_word_chars(),
            exclude_stop_words: false,
            stop_words_language: default_language(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            cache: true,
            cache_dir: None,
            unknown_fields: HashMap::new(),
        }
    }
}

impl DigestConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DigestError::InvalidConfig(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            DigestError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        let engine = ValidationEngine::with_defaults();
        debug!(rules = ?engine.rule_names(), "validating configuration");
        engine.validate(self)
    }

    /// Validate, log warnings, and fail on the first error.
    pub fn validated(self) -> Result<Self> {
        let report = self.validate();
        for warning in report.warnings() {
            warn!(%warning, "configuration warning");
        }
        if let Some(err) = report.errors().next() {
            return Err(DigestError::InvalidConfig(err.to_string()));
        }
        Ok(self)
    }
}

impl CorpusConfig {
    /// Provider matching this configuration.
    pub fn provider(&self) -> Box<dyn CorpusProvider> {
        if !self.cache {
            return Box::new(BundledCorpus);
        }
        match &self.cache_dir {
            Some(dir) => Box::new(CachedCorpus::new(dir)),
            None => match CachedCorpus::default_location() {
                Some(cached) => Box::new(cached),
                None => {
                    warn!("no platform cache directory; using the bundled corpus");
                    Box::new(BundledCorpus)
                }
            },
        }
    }
}
