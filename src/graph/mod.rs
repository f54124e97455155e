//! Sentence similarity graph
//!
//! Sentences are nodes; every pair (self-pairs included) is joined by an
//! edge weighted with the cosine similarity of their term vectors.

pub mod builder;
