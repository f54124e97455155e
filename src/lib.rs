//! # meeting_summarizer
//!
//! Short, representative summaries of meeting transcripts.
//!
//! The core is an extractive summarizer: sentences are vectorized with
//! TF-IDF, compared pairwise by cosine similarity, scored by their total
//! similarity to the rest of the transcript, and the top k are emitted in
//! their original order. A remote LLM service can sit in front of it; when
//! that service is unavailable the extractive path answers instead.
//!
//! ```no_run
//! use meeting_summarizer::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::extractive(SummarizerConfig::default().with_num_sentences(3))?;
//! let summary = summarizer.generate_summary("...transcript text...");
//! # Ok::<(), meeting_summarizer::SummarizerError>(())
//! ```

pub mod backend;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod persistence;
pub mod remote;
pub mod summarizer;
pub mod tfidf;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    RemoteConfig, Sentence, SummarizerConfig, SummaryMode, DEFAULT_MAX_FEATURES,
    DEFAULT_MIN_TEXT_LENGTH, DEFAULT_NUM_SENTENCES, TEXT_TOO_SHORT,
};

// Re-export main functionality
pub use backend::{Summarize, Summarizer, SummaryBackend};
pub use graph::builder::{build_similarity, SimilarityMatrix};
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use persistence::{save_summary, SummaryStats};
pub use remote::{clean_markdown, RemoteSummarizer};
pub use summarizer::extractive::{ExtractiveSummarizer, ExtractiveSummary, SelectionPath};
pub use summarizer::scorer::score;
pub use summarizer::selector::SentenceSelector;
pub use tfidf::{TermVector, TfidfMatrix, TfidfVectorizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` extractively with `k` sentences
///
/// Never fails: short inputs yield [`TEXT_TOO_SHORT`], ranking failures
/// yield the first `k` sentences. A `k` of zero is treated as one.
pub fn generate_summary(text: &str, k: usize) -> String {
    ExtractiveSummarizer::with_num_sentences(k).generate_summary(text)
}
