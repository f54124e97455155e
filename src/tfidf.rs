//! TF-IDF sentence vectorization
//!
//! Every sentence is treated as one document. The vocabulary is built from
//! the sentence set alone, so two calls never share state.

use crate::errors::{Result, SummarizerError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Sentence, DEFAULT_MAX_FEATURES};
use rustc_hash::{FxHashMap, FxHashSet};

/// A sparse, L2-normalised term vector for one sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions as (vocabulary index, weight), sorted by index
    pub entries: Vec<(u32, f64)>,
    /// L2 norm of `entries` (1.0, or 0.0 for a zero vector)
    pub norm: f64,
}

impl TermVector {
    /// Build from raw weights, normalising to unit length
    ///
    /// Repeated indices are summed; non-positive weights are dropped.
    pub fn from_weights(mut raw: Vec<(u32, f64)>) -> Self {
        raw.sort_by_key(|&(idx, _)| idx);

        let mut entries: Vec<(u32, f64)> = Vec::with_capacity(raw.len());
        for (idx, w) in raw {
            match entries.last_mut() {
                Some((last, acc)) if *last == idx => *acc += w,
                _ => entries.push((idx, w)),
            }
        }
        entries.retain(|&(_, w)| w > 0.0);

        let raw_norm = Self::compute_norm(&entries);
        if raw_norm <= f64::EPSILON {
            return Self::default();
        }
        for (_, w) in entries.iter_mut() {
            *w /= raw_norm;
        }
        let norm = Self::compute_norm(&entries);
        Self { entries, norm }
    }

    fn compute_norm(entries: &[(u32, f64)]) -> f64 {
        entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Whether every weight is zero
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a vocabulary index (0.0 when absent)
    pub fn weight(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(idx, _)| idx)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product via a merge over the sorted entries
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Cosine similarity; 0.0 whenever either side is a zero vector
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let denom = self.norm * other.norm;
        if denom <= f64::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(0.0, 1.0)
    }
}

/// Output of [`TfidfVectorizer::fit_transform`]
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Vocabulary terms, indexed by vocabulary id
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per vocabulary id
    pub idf: Vec<f64>,
    /// One vector per input sentence, same order
    pub vectors: Vec<TermVector>,
}

impl TfidfMatrix {
    /// Vocabulary id of a term
    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| i as u32)
    }
}

/// Classic TF-IDF with smoothed IDF and a bounded vocabulary
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(StopwordFilter::default(), DEFAULT_MAX_FEATURES)
    }
}

impl TfidfVectorizer {
    /// Create a vectorizer with the given stopwords and vocabulary cap
    pub fn new(stopwords: StopwordFilter, max_features: usize) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords,
            max_features,
        }
    }

    /// Surviving terms of one sentence, in order
    fn terms(&self, sentence: &Sentence) -> Vec<String> {
        self.tokenizer
            .words(&sentence.text)
            .into_iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }

    /// Learn the vocabulary from `sentences` and vectorize each of them
    ///
    /// When the vocabulary exceeds `max_features`, the terms with the
    /// highest document frequency are kept (ties by term text). Weights are
    /// `tf * (ln((1 + n) / (1 + df)) + 1)` before L2 normalisation.
    pub fn fit_transform(&self, sentences: &[Sentence]) -> Result<TfidfMatrix> {
        if sentences.is_empty() {
            return Err(SummarizerError::empty_input("no sentences to vectorize"));
        }

        let docs: Vec<Vec<String>> = sentences.iter().map(|s| self.terms(s)).collect();

        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for doc in &docs {
            let unique: FxHashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        if df.is_empty() {
            return Err(SummarizerError::empty_vocabulary(
                "all sentences contain only stop words",
            ));
        }

        let mut kept: Vec<(&str, usize)> = df.into_iter().collect();
        if kept.len() > self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(self.max_features);
        }
        kept.sort_by(|a, b| a.0.cmp(b.0));

        let n = sentences.len() as f64;
        let vocabulary: Vec<String> = kept.iter().map(|(t, _)| t.to_string()).collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|&(_, df)| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        let index: FxHashMap<&str, u32> = kept
            .iter()
            .enumerate()
            .map(|(i, &(t, _))| (t, i as u32))
            .collect();

        let vectors = docs
            .iter()
            .map(|doc| {
                let mut counts: FxHashMap<u32, f64> = FxHashMap::default();
                for term in doc {
                    if let Some(&id) = index.get(term.as_str()) {
                        *counts.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                let weights = counts
                    .into_iter()
                    .map(|(id, tf)| (id, tf * idf[id as usize]))
                    .collect();
                TermVector::from_weights(weights)
            })
            .collect();

        Ok(TfidfMatrix {
            vocabulary,
            idf,
            vectors,
        })
    }
}
