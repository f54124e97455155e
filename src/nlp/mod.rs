//! Natural Language Processing components
//!
//! This module provides sentence segmentation, word tokenization and
//! stopword filtering.

pub mod stopwords;
pub mod tokenizer;
