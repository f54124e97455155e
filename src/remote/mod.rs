//! Remote LLM summarization
//!
//! Preferred backend when configured; the extractive summarizer covers for
//! it whenever it is unavailable.

pub mod client;
pub mod markdown;

pub use client::RemoteSummarizer;
pub use markdown::clean_markdown;
