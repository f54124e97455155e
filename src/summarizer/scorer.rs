//! Sentence centrality scoring

use crate::graph::builder::SimilarityMatrix;

/// Score every sentence by its total similarity to all sentences
///
/// `scores[i]` is the sum of row `i`, self-similarity included. Scores are
/// not normalised by sentence count.
pub fn score(matrix: &SimilarityMatrix) -> Vec<f64> {
    matrix.row_sums()
}
