//! Remote chat-completions summarizer
//!
//! One blocking request per summary, bounded by the configured timeout.
//! Any transport error, timeout, non-200 status or unusable payload comes
//! back as [`SummarizerError::RemoteUnavailable`] so the caller can fall
//! back to the extractive path.
//!
//! The client is `reqwest::blocking`; do not call it from inside an async
//! runtime worker thread.

use super::markdown::clean_markdown;
use crate::errors::{Result, SummarizerError};
use crate::types::RemoteConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Longest slice of an error body carried into the error message
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice, if any
    fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

/// Build the meeting-summary instruction for a transcript
pub fn build_prompt(transcript: &str) -> String {
    format!(
        "You summarize meeting transcripts. Read the transcript below and write a \
         thorough, well-organized summary covering:\n\
         1. The main topics discussed\n\
         2. Key points and decisions\n\
         3. Action items, if any\n\
         4. Important details and context\n\
         5. The overall outcome of the meeting\n\n\
         Write plain text only: no markdown, no asterisks, no headings.\n\n\
         Transcript:\n{transcript}\n\n\
         Summary:"
    )
}

/// Summarizer backed by a remote LLM service
#[derive(Debug, Clone)]
pub struct RemoteSummarizer {
    config: RemoteConfig,
    client: Client,
}

impl RemoteSummarizer {
    /// Create a summarizer for the given service
    pub fn new(config: RemoteConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SummarizerError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// The active configuration
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Request a summary of `text`
    pub fn summarize(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(build_prompt(text)),
            }],
        };

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "requesting remote summary"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let body: String = response
                .text()
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            return Err(SummarizerError::remote_unavailable(format!(
                "status {status}: {body}"
            )));
        }

        let payload: ChatResponse = response.json()?;
        let content = payload
            .into_content()
            .ok_or_else(|| SummarizerError::remote_unavailable("response contained no summary"))?;

        let summary = clean_markdown(&content);
        if summary.is_empty() {
            return Err(SummarizerError::remote_unavailable("remote summary was empty"));
        }

        debug!(chars = summary.len(), "remote summary received");
        Ok(summary)
    }
}
