//! Top-k sentence selection
//!
//! Picks the k best-scoring sentences and hands them back in document
//! order. Selection order and output order differ on purpose: ranking
//! decides membership, position decides layout.

use crate::errors::{Result, SummarizerError};
use crate::types::{Sentence, DEFAULT_NUM_SENTENCES};

/// Scores this close to the best of their run are considered tied
const SCORE_EPSILON: f64 = 1e-10;

/// Top-k sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Number of sentences to select
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SENTENCES)
    }
}

impl SentenceSelector {
    /// Create a selector keeping `num_sentences` sentences
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Sentence indices ordered best first
    ///
    /// Scores within `SCORE_EPSILON` of the best score of their run are
    /// tied, and tied sentences go to the lower index. NaN scores rank last.
    pub fn rank(scores: &[f64]) -> Vec<usize> {
        let key = |i: usize| {
            if scores[i].is_nan() {
                f64::NEG_INFINITY
            } else {
                scores[i]
            }
        };

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| key(b).total_cmp(&key(a)).then(a.cmp(&b)));

        let mut start = 0;
        while start < order.len() {
            let lead = key(order[start]);
            let mut end = start + 1;
            while end < order.len() && lead - key(order[end]) <= SCORE_EPSILON {
                end += 1;
            }
            order[start..end].sort_unstable();
            start = end;
        }
        order
    }

    /// Select the top-k sentences, returned in ascending document order
    ///
    /// When there are no more sentences than k, every sentence is returned
    /// unchanged.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Result<Vec<Sentence>> {
        if sentences.len() <= self.num_sentences {
            return Ok(sentences.to_vec());
        }

        if scores.len() != sentences.len() {
            return Err(SummarizerError::internal(format!(
                "got {} scores for {} sentences",
                scores.len(),
                sentences.len()
            )));
        }

        let mut top: Vec<usize> = Self::rank(scores)
            .into_iter()
            .take(self.num_sentences)
            .collect();
        top.sort_unstable();

        Ok(top.into_iter().map(|i| sentences[i].clone()).collect())
    }
}
