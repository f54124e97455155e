//! Saving summaries and comparing them with their source
//!
//! Saved files carry a small header: the session name, the generation time
//! in Indian Standard Time and the mode label.

use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Width of the `=` rules framing the summary body
const RULE_WIDTH: usize = 60;

/// Timestamp format used in the header
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time in Indian Standard Time
pub fn now_ist() -> DateTime<Tz> {
    Utc::now().with_timezone(&Kolkata)
}

/// Render the full contents of a summary file
pub fn render_summary_file(
    summary: &str,
    session_name: &str,
    mode_label: &str,
    generated: DateTime<Tz>,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "Summary: {session_name}\n\
         Generated: {} IST\n\
         Mode: {mode_label}\n\
         {rule}\n\n\
         {summary}\
         \n\n{rule}\n",
        generated.format(TIMESTAMP_FORMAT)
    )
}

/// Write `<session_name>_summary.txt` into `session_folder`
///
/// Returns the path of the written file.
pub fn save_summary(
    summary: &str,
    session_folder: &Path,
    session_name: &str,
    mode_label: &str,
) -> Result<PathBuf> {
    let path = session_folder.join(format!("{session_name}_summary.txt"));
    let contents = render_summary_file(summary, session_name, mode_label, now_ist());
    fs::write(&path, contents)?;
    debug!(path = %path.display(), "summary saved");
    Ok(path)
}

/// Size comparison between a transcript and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    pub original_sentences: usize,
    pub summary_sentences: usize,
    /// `summary_words / original_words`, 0 for an empty original
    pub compression_ratio: f64,
}

impl SummaryStats {
    /// Count words and sentences of both texts
    pub fn compute(original: &str, summary: &str) -> Self {
        let tokenizer = Tokenizer::new();
        let original_words = original.split_whitespace().count();
        let summary_words = summary.split_whitespace().count();

        let compression_ratio = if original_words > 0 {
            summary_words as f64 / original_words as f64
        } else {
            0.0
        };

        Self {
            original_words,
            summary_words,
            original_sentences: tokenizer.segment(original).len(),
            summary_sentences: tokenizer.segment(summary).len(),
            compression_ratio,
        }
    }
}
