//! Core types for meeting_summarizer
//!
//! This module defines the sentence record shared by every pipeline stage,
//! the summarization mode, and the configuration structs passed in at
//! construction.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// `index` is the 0-based position in the document and never changes once
/// the segmenter has assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// The trimmed sentence text
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            index,
            text: text.into(),
            start,
            end,
        }
    }
}

// ============================================================================
// Summary Mode
// ============================================================================

/// Which backend produced (or should produce) a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Sentence-centrality extraction, always available
    #[default]
    Extractive,
    /// Remote LLM service with extractive fallback
    Remote,
}

impl SummaryMode {
    /// Label written into saved summary headers
    pub fn label(&self) -> &'static str {
        match self {
            SummaryMode::Extractive => "textrank",
            SummaryMode::Remote => "remote",
        }
    }
}

impl std::str::FromStr for SummaryMode {
    type Err = SummarizerError;

    /// Accepts exactly `extractive` or `remote`
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "extractive" => Ok(SummaryMode::Extractive),
            "remote" => Ok(SummaryMode::Remote),
            other => Err(SummarizerError::invalid_config(format!(
                "unknown summary mode '{other}', expected 'extractive' or 'remote'"
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default number of sentences in an extractive summary
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// Trimmed inputs shorter than this are rejected with [`TEXT_TOO_SHORT`]
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;

/// Default vocabulary cap for the TF-IDF vectorizer
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Sentinel returned for inputs below the minimum length
pub const TEXT_TOO_SHORT: &str = "Text too short to summarize.";

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to keep (k)
    pub num_sentences: usize,
    /// Minimum trimmed input length in characters
    pub min_text_length: usize,
    /// Maximum vocabulary size for TF-IDF
    pub max_features: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            max_features: DEFAULT_MAX_FEATURES,
            language: "en".to_string(),
            stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummarizerError::invalid_config("num_sentences must be > 0"));
        }

        if self.max_features == 0 {
            return Err(SummarizerError::invalid_config("max_features must be > 0"));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizerError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set number of summary sentences
    pub fn with_num_sentences(mut self, k: usize) -> Self {
        self.num_sentences = k;
        self
    }

    /// Builder method: set minimum input length
    pub fn with_min_text_length(mut self, min: usize) -> Self {
        self.min_text_length = min;
        self
    }

    /// Builder method: set vocabulary cap
    pub fn with_max_features(mut self, max: usize) -> Self {
        self.max_features = max;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}

/// Default request timeout for the remote service
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the remote summarization service
///
/// Everything here is supplied by the caller; nothing is compiled in.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Bearer token
    pub api_key: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Mode label written to saved summaries
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_SECS
}

fn default_display_name() -> String {
    "Remote".to_string()
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl RemoteConfig {
    /// Create a remote config with default timeout and label
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout_secs: default_timeout_secs(),
            display_name: default_display_name(),
        }
    }

    /// Read the remote settings from `SUMMARIZER_*` environment variables
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name).map_err(|e| SummarizerError::invalid_config(format!("{name}: {e}")))
        };

        let mut config = Self::new(
            required("SUMMARIZER_REMOTE_URL")?,
            required("SUMMARIZER_API_KEY")?,
            required("SUMMARIZER_MODEL")?,
        );

        if let Ok(raw) = env::var("SUMMARIZER_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|e| {
                SummarizerError::invalid_config(format!("SUMMARIZER_TIMEOUT_SECS: {e}"))
            })?;
        }
        if let Ok(name) = env::var("SUMMARIZER_DISPLAY_NAME") {
            config.display_name = name;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SummarizerError::invalid_config("endpoint must not be empty"));
        }

        if self.model.trim().is_empty() {
            return Err(SummarizerError::invalid_config("model must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(SummarizerError::invalid_config("timeout_secs must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Builder method: set display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}
