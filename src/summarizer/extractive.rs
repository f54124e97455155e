//! Extractive summarization orchestrator
//!
//! Wires segmentation, TF-IDF, the similarity graph, scoring and selection
//! into one call. Every failure inside the ranking stages resolves to the
//! first k sentences verbatim.

use super::join_sentences;
use super::scorer::score;
use super::selector::SentenceSelector;
use crate::errors::{Result, SummarizerError};
use crate::graph::builder::build_similarity;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::tfidf::TfidfVectorizer;
use crate::types::{Sentence, SummarizerConfig, TEXT_TOO_SHORT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the summary sentences were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    /// The document had no more than k sentences and was returned as-is
    Passthrough,
    /// Sentences were ranked by centrality
    Ranked,
    /// Ranking failed; the first k sentences were used
    LeadFallback,
}

/// A summary together with the data that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractiveSummary {
    /// Final summary text
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// Centrality score per source sentence (empty unless ranked)
    pub scores: Vec<f64>,
    /// Which path produced the summary
    pub path: SelectionPath,
}

/// Sentence-centrality summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
    vectorizer: TfidfVectorizer,
    selector: SentenceSelector,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::build(SummarizerConfig::default())
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer from a validated config
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Default settings keeping `k` sentences; a `k` of zero keeps one
    pub fn with_num_sentences(k: usize) -> Self {
        Self::build(SummarizerConfig::default().with_num_sentences(k.max(1)))
    }

    fn build(config: SummarizerConfig) -> Self {
        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(&config.stopwords);

        Self {
            tokenizer: Tokenizer::new(),
            vectorizer: TfidfVectorizer::new(stopwords, config.max_features),
            selector: SentenceSelector::new(config.num_sentences),
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Whether `text` is long enough to summarize
    pub fn accepts(&self, text: &str) -> bool {
        text.trim().chars().count() >= self.config.min_text_length
    }

    /// Summarize `text`, never failing
    ///
    /// Returns [`TEXT_TOO_SHORT`] for inputs below the minimum length.
    pub fn generate_summary(&self, text: &str) -> String {
        match self.summarize_with_details(text) {
            Ok(summary) => summary.text,
            Err(_) => TEXT_TOO_SHORT.to_string(),
        }
    }

    /// Summarize `text` and report how the result was reached
    ///
    /// The only error is [`SummarizerError::EmptyInput`] for inputs below
    /// the minimum length; ranking failures take the lead fallback.
    pub fn summarize_with_details(&self, text: &str) -> Result<ExtractiveSummary> {
        if !self.accepts(text) {
            return Err(SummarizerError::empty_input(format!(
                "trimmed text is shorter than {} characters",
                self.config.min_text_length
            )));
        }

        let sentences = self.tokenizer.segment(text);
        let k = self.config.num_sentences;
        debug!(sentences = sentences.len(), k, "segmented transcript");

        if sentences.len() <= k {
            return Ok(ExtractiveSummary {
                text: text.to_string(),
                sentences,
                scores: Vec::new(),
                path: SelectionPath::Passthrough,
            });
        }

        match self.rank(&sentences) {
            Ok((selected, scores)) => Ok(ExtractiveSummary {
                text: join_sentences(&selected),
                sentences: selected,
                scores,
                path: SelectionPath::Ranked,
            }),
            Err(err) => {
                warn!(error = %err, "sentence ranking failed, using leading sentences");
                let lead = sentences[..k].to_vec();
                Ok(ExtractiveSummary {
                    text: join_sentences(&lead),
                    sentences: lead,
                    scores: Vec::new(),
                    path: SelectionPath::LeadFallback,
                })
            }
        }
    }

    /// Vectorize, build the similarity graph, score and select
    fn rank(&self, sentences: &[Sentence]) -> Result<(Vec<Sentence>, Vec<f64>)> {
        let tfidf = self.vectorizer.fit_transform(sentences)?;
        let similarity = build_similarity(&tfidf.vectors);
        if similarity.size() != sentences.len() {
            return Err(SummarizerError::internal(format!(
                "similarity matrix has {} rows for {} sentences",
                similarity.size(),
                sentences.len()
            )));
        }
        debug!(
            vocabulary = tfidf.vocabulary.len(),
            sentences = sentences.len(),
            "built similarity graph"
        );

        let scores = score(&similarity);
        let selected = self.selector.select(sentences, &scores)?;
        Ok((selected, scores))
    }
}
