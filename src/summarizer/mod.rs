//! Extractive summarization components
//!
//! Sentence centrality is the row sum of the similarity matrix (diagonal
//! included). This is a one-shot heuristic, not iterative PageRank.

pub mod extractive;
pub mod scorer;
pub mod selector;

/// Join sentences with a single space
pub fn join_sentences(sentences: &[crate::types::Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
