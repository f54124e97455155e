//! Dense similarity matrix construction
//!
//! Exact pairwise cosine similarity, O(n²) in the sentence count. Only the
//! upper triangle is computed; the lower triangle is mirrored so the matrix
//! is symmetric by construction.

use crate::tfidf::TermVector;

/// Square, symmetric, non-negative sentence similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of rows (and columns)
    size: usize,
    /// Row-major values, `size * size` long
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of sentences the matrix covers
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set both `(i, j)` and `(j, i)`
    fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of every row, diagonal included
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.row(i).iter().sum()).collect()
    }
}

/// Build the similarity matrix for a set of term vectors
pub fn build_similarity(vectors: &[TermVector]) -> SimilarityMatrix {
    let n = vectors.len();
    let mut matrix = SimilarityMatrix::zeros(n);

    for i in 0..n {
        for j in i..n {
            let sim = vectors[i].cosine_similarity(&vectors[j]);
            matrix.set_symmetric(i, j, sim);
        }
    }

    matrix
}
