//! Summarization backends and the fallback-aware front door
//!
//! The backend is a closed choice made at construction. A remote backend
//! that reports [`SummarizerError::RemoteUnavailable`] is covered by the
//! extractive summarizer; callers always receive a string.

use crate::errors::Result;
use crate::persistence::save_summary;
use crate::remote::RemoteSummarizer;
use crate::summarizer::extractive::ExtractiveSummarizer;
use crate::types::{RemoteConfig, SummarizerConfig, SummaryMode, TEXT_TOO_SHORT};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A component that can turn a transcript into a summary
pub trait Summarize {
    /// Which mode this backend implements
    fn mode(&self) -> SummaryMode;

    /// Summarize `text`
    fn summarize(&self, text: &str) -> Result<String>;
}

impl Summarize for ExtractiveSummarizer {
    fn mode(&self) -> SummaryMode {
        SummaryMode::Extractive
    }

    fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_with_details(text).map(|summary| summary.text)
    }
}

impl Summarize for RemoteSummarizer {
    fn mode(&self) -> SummaryMode {
        SummaryMode::Remote
    }

    fn summarize(&self, text: &str) -> Result<String> {
        RemoteSummarizer::summarize(self, text)
    }
}

/// The backend selected at construction
#[derive(Debug, Clone)]
pub enum SummaryBackend {
    Extractive(ExtractiveSummarizer),
    Remote(RemoteSummarizer),
}

impl Summarize for SummaryBackend {
    fn mode(&self) -> SummaryMode {
        match self {
            SummaryBackend::Extractive(inner) => inner.mode(),
            SummaryBackend::Remote(inner) => inner.mode(),
        }
    }

    fn summarize(&self, text: &str) -> Result<String> {
        match self {
            SummaryBackend::Extractive(inner) => Summarize::summarize(inner, text),
            SummaryBackend::Remote(inner) => Summarize::summarize(inner, text),
        }
    }
}

/// Transcript summarizer with extractive fallback
#[derive(Debug, Clone)]
pub struct Summarizer {
    backend: SummaryBackend,
    fallback: ExtractiveSummarizer,
}

impl Summarizer {
    /// Extractive-only summarizer
    pub fn extractive(config: SummarizerConfig) -> Result<Self> {
        let extractive = ExtractiveSummarizer::new(config)?;
        Ok(Self {
            backend: SummaryBackend::Extractive(extractive.clone()),
            fallback: extractive,
        })
    }

    /// Remote-first summarizer; `config` drives the extractive fallback
    pub fn remote(config: SummarizerConfig, remote: RemoteConfig) -> Result<Self> {
        let fallback = ExtractiveSummarizer::new(config)?;
        let remote = RemoteSummarizer::new(remote)?;
        Ok(Self {
            backend: SummaryBackend::Remote(remote),
            fallback,
        })
    }

    /// The configured mode
    pub fn mode(&self) -> SummaryMode {
        self.backend.mode()
    }

    /// Label written into saved summary headers
    pub fn display_label(&self) -> &str {
        match &self.backend {
            SummaryBackend::Remote(remote) => remote.config().display_name.as_str(),
            SummaryBackend::Extractive(_) => SummaryMode::Extractive.label(),
        }
    }

    /// Summarize `text`, never failing
    ///
    /// Inputs below the minimum length yield [`TEXT_TOO_SHORT`]. A remote
    /// failure is logged and answered by the extractive summarizer.
    pub fn generate_summary(&self, text: &str) -> String {
        if !self.fallback.accepts(text) {
            return TEXT_TOO_SHORT.to_string();
        }

        match self.backend.summarize(text) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(
                    mode = ?self.mode(),
                    remote_unavailable = err.is_remote_unavailable(),
                    error = %err,
                    "summary backend failed, falling back to extractive"
                );
                self.fallback.generate_summary(text)
            }
        }
    }

    /// Write `summary` under `session_folder` with this summarizer's label
    pub fn save_summary(
        &self,
        summary: &str,
        session_folder: &Path,
        session_name: &str,
    ) -> Result<PathBuf> {
        save_summary(summary, session_folder, session_name, self.display_label())
    }
}
