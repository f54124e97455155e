//! Unicode-aware sentence segmentation and word tokenization
//!
//! Sentence boundaries follow UAX #29, with two corrections on top. A
//! boundary that falls right after a known abbreviation or a single capital
//! initial ("Dr.", "e.g.", "J.") is removed, and so is a boundary caused by
//! a lone line break inside an unterminated sentence (hard-wrapped
//! transcripts). Blank lines still separate sentences.

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that never end a sentence (lowercase, with the final dot)
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
    "inc.", "ltd.", "approx.",
];

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to consider
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    ///
    /// Single-character words are dropped by default.
    pub fn new() -> Self {
        Self {
            min_token_length: 2,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Split text into ordered, trimmed, non-empty sentences
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for (start, end) in self.sentence_boundaries(text) {
            let raw = &text[start..end];
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let lead = raw.len() - raw.trim_start().len();
            let abs_start = start + lead;
            let index = sentences.len();
            sentences.push(Sentence::new(
                trimmed,
                abs_start,
                abs_start + trimmed.len(),
                index,
            ));
        }

        sentences
    }

    /// Lowercased word tokens of a sentence, in order
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(|word| word.to_lowercase())
            .collect()
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        // Start of a segment whose trailing boundary was suppressed
        let mut pending: Option<usize> = None;

        for (idx, segment) in text.split_sentence_bound_indices() {
            let start = pending.take().unwrap_or(idx);
            let end = idx + segment.len();
            let candidate = &text[start..end];

            if !Self::ends_paragraph(candidate)
                && (Self::ends_with_abbreviation(candidate) || Self::is_soft_wrapped(candidate))
            {
                pending = Some(start);
                continue;
            }

            if !candidate.trim().is_empty() {
                boundaries.push((start, end));
            }
        }

        if let Some(start) = pending {
            if !text[start..].trim().is_empty() {
                boundaries.push((start, text.len()));
            }
        }

        boundaries
    }

    /// Number of line breaks in the trailing whitespace of `segment`
    fn trailing_line_breaks(segment: &str) -> usize {
        let content = segment.trim_end();
        segment[content.len()..].matches('\n').count()
    }

    /// Whether `segment` is followed by a blank line
    fn ends_paragraph(segment: &str) -> bool {
        Self::trailing_line_breaks(segment) >= 2
    }

    /// Whether `segment` stops at a single line break without terminal punctuation
    fn is_soft_wrapped(segment: &str) -> bool {
        let content = segment.trim_end();
        if content.is_empty() {
            return false;
        }
        if Self::trailing_line_breaks(segment) != 1 {
            return false;
        }

        let content = content.trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']'));
        !content.ends_with(|c: char| matches!(c, '.' | '!' | '?'))
    }

    /// Whether the last word of `segment` is an abbreviation or an initial
    fn ends_with_abbreviation(segment: &str) -> bool {
        let Some(last) = segment.split_whitespace().last() else {
            return false;
        };
        let last = last.trim_start_matches(|c: char| c == '(' || c == '"' || c == '\'');

        let lower = last.to_lowercase();
        if ABBREVIATIONS.contains(&lower.as_str()) {
            return true;
        }

        let mut chars = last.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_segmentation() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("Hello world. This is a test. Final sentence.");

        assert_eq!(
            texts(&sentences),
            vec!["Hello world.", "This is a test.", "Final sentence."]
        );
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_question_and_exclamation() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("Is this working? Yes it is! Great.");
        assert_eq!(texts(&sentences), vec!["Is this working?", "Yes it is!", "Great."]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tokenizer = Tokenizer::new();
        let sentences =
            tokenizer.segment("Dr. Smith joined the call. We reviewed the budget, e.g. travel.");

        assert_eq!(
            texts(&sentences),
            vec![
                "Dr. Smith joined the call.",
                "We reviewed the budget, e.g. travel."
            ]
        );
    }

    #[test]
    fn test_initial_does_not_split() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("The plan came from J. Doe last week. It was approved.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "The plan came from J. Doe last week.");
    }

    #[test]
    fn test_offsets_point_into_source() {
        let tokenizer = Tokenizer::new();
        let text = "  First one.   Second one.  ";
        let sentences = tokenizer.segment(text);

        assert_eq!(sentences.len(), 2);
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_hard_wrapped_lines_join() {
        let tokenizer = Tokenizer::new();
        let text = "The database\nmigration slipped a week. Priya owns\nthe rollback plan.";
        let sentences = tokenizer.segment(text);

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].text.starts_with("The database"));
        assert!(sentences[0].text.ends_with("slipped a week."));
        assert_eq!(&text[sentences[1].start..sentences[1].end], sentences[1].text);
    }

    #[test]
    fn test_blank_line_separates() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("Action items\n\nBudget review on Friday.");
        assert_eq!(texts(&sentences), vec!["Action items", "Budget review on Friday."]);
    }

    #[test]
    fn test_blank_line_after_abbreviation_separates() {
        let tokenizer = Tokenizer::new();

        let sentences = tokenizer.segment("We spoke with Dr.\n\nNext topic is the budget.");
        assert_eq!(
            texts(&sentences),
            vec!["We spoke with Dr.", "Next topic is the budget."]
        );

        let sentences = tokenizer.segment("The memo was signed by J.\n \nHiring resumes in May.");
        assert_eq!(
            texts(&sentences),
            vec!["The memo was signed by J.", "Hiring resumes in May."]
        );
    }

    #[test]
    fn test_spoken_no_ends_sentence() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("The answer was no. Priya will email them.");
        assert_eq!(
            texts(&sentences),
            vec!["The answer was no.", "Priya will email them."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("this transcript has no ending punctuation");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_trailing_abbreviation_kept() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("We bought pens, paper, etc.");
        assert_eq!(texts(&sentences), vec!["We bought pens, paper, etc."]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.segment("").is_empty());
        assert!(tokenizer.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_words_lowercase_and_min_length() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.words("The Q3 budget, a plan & 42 items!");
        assert_eq!(words, vec!["the", "q3", "budget", "plan", "42", "items"]);
    }

    #[test]
    fn test_words_custom_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(1);
        assert_eq!(tokenizer.words("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.words("Café résumé naïve.");
        assert_eq!(words, vec!["café", "résumé", "naïve"]);
    }
}
