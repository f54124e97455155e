//! Integration tests for meeting_summarizer

use meeting_summarizer::*;

/// Sample transcript for testing
const SAMPLE_TRANSCRIPT: &str = r#"
Good morning everyone, let's get started with the quarterly planning meeting.
The first item is the database migration to the new cluster. The database
migration has been delayed by two weeks because of vendor issues. Priya will
own the rollback plan for the database migration. Next we discussed hiring.
Two backend engineers will join in April. Marketing asked whether the launch
date is still fixed. The launch date depends on the database migration
finishing first. Someone mentioned the coffee machine is broken again. We
closed the meeting with a reminder to submit expense reports by Friday.
"#;

fn texts(sentences: &[Sentence]) -> Vec<&str> {
    sentences.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn test_full_pipeline() {
    // Segment
    let tokenizer = Tokenizer::new();
    let sentences = tokenizer.segment(SAMPLE_TRANSCRIPT);
    assert_eq!(sentences.len(), 10);

    // Vectorize
    let tfidf = TfidfVectorizer::default().fit_transform(&sentences).unwrap();
    assert_eq!(tfidf.vectors.len(), sentences.len());
    assert!(tfidf.vocabulary.len() <= DEFAULT_MAX_FEATURES);

    // Similarity graph
    let matrix = build_similarity(&tfidf.vectors);
    assert_eq!(matrix.size(), sentences.len());

    // Score and select
    let scores = score(&matrix);
    assert_eq!(scores.len(), sentences.len());
    assert!(scores.iter().all(|&s| s >= 0.0));

    let selected = SentenceSelector::new(3).select(&sentences, &scores).unwrap();
    assert_eq!(selected.len(), 3);
    for pair in selected.windows(2) {
        assert!(pair[0].index < pair[1].index);
    }
}

#[test]
fn test_migration_sentences_dominate() {
    let summary = ExtractiveSummarizer::new(SummarizerConfig::default().with_num_sentences(2))
        .unwrap()
        .summarize_with_details(SAMPLE_TRANSCRIPT)
        .unwrap();

    assert_eq!(summary.path, SelectionPath::Ranked);
    for sentence in &summary.sentences {
        assert!(
            sentence.text.contains("database"),
            "unexpected pick: {}",
            sentence.text
        );
    }
}

#[test]
fn test_scenario_short_document_unchanged() {
    let text = "We agreed on the roadmap today. Hiring starts in March. Budget stays flat.";
    assert_eq!(generate_summary(text, 5), text);
}

#[test]
fn test_scenario_two_topics() {
    let text = "The budget and the forecast. \
        The forecast and the spending. \
        The budget, the forecast, the spending and the invoices. \
        The spending and the invoices. \
        The invoices and the budget. \
        The server and the outage. \
        The outage and the deployment. \
        The server, the outage, the deployment and the monitoring. \
        The deployment and the monitoring. \
        The monitoring and the server.";

    let summary = generate_summary(text, 2);
    assert_eq!(
        summary,
        "The budget, the forecast, the spending and the invoices. \
         The server, the outage, the deployment and the monitoring."
    );
}

#[test]
fn test_scenario_only_stop_words() {
    let text = "It is what it is. The the and of the. Is it? It is. And so on and so on. Of the and the.";

    let sentences = Tokenizer::new().segment(text);
    assert_eq!(sentences.len(), 6);

    for k in 1..=3 {
        let summary = generate_summary(text, k);
        assert_eq!(summary, texts(&sentences[..k]).join(" "));
    }

    // Fewer sentences than k: passthrough
    assert_eq!(generate_summary(text, 10), text);
}

#[test]
fn test_single_stop_word_run() {
    let text = "the the and of the the the and of the the the and of the the the";
    assert_eq!(generate_summary(text, 1), text);
}

#[test]
fn test_length_boundary() {
    let forty_nine = "x".repeat(49);
    let fifty = "x".repeat(50);

    assert_eq!(generate_summary(&forty_nine, 5), TEXT_TOO_SHORT);
    assert_eq!(generate_summary(&format!("\n  {forty_nine}  \n"), 5), TEXT_TOO_SHORT);
    assert_eq!(generate_summary(&fifty, 5), fifty);
}

#[test]
fn test_empty_and_whitespace() {
    assert_eq!(generate_summary("", 5), TEXT_TOO_SHORT);
    assert_eq!(generate_summary(&" ".repeat(200), 5), TEXT_TOO_SHORT);
}

#[test]
fn test_deterministic_output() {
    let first = generate_summary(SAMPLE_TRANSCRIPT, 4);
    for _ in 0..5 {
        assert_eq!(generate_summary(SAMPLE_TRANSCRIPT, 4), first);
    }
}

#[test]
fn test_zero_k_treated_as_one() {
    let summary = generate_summary(SAMPLE_TRANSCRIPT, 0);
    assert_eq!(Tokenizer::new().segment(&summary).len(), 1);
}

#[test]
fn test_custom_stopwords_change_vocabulary() {
    let sentences = Tokenizer::new().segment(SAMPLE_TRANSCRIPT);

    let mut filter = StopwordFilter::new("en");
    filter.add_stopwords(&["database", "migration"]);
    let tfidf = TfidfVectorizer::new(filter, DEFAULT_MAX_FEATURES)
        .fit_transform(&sentences)
        .unwrap();

    assert!(tfidf.term_index("database").is_none());
    assert!(tfidf.term_index("rollback").is_some());
}

#[test]
fn test_remote_unavailable_falls_back() {
    let remote = RemoteConfig::new("http://127.0.0.1:9/v1/chat/completions", "key", "model")
        .with_timeout_secs(2);
    let config = SummarizerConfig::default().with_num_sentences(3);

    let summarizer = Summarizer::remote(config.clone(), remote).unwrap();
    let expected = Summarizer::extractive(config)
        .unwrap()
        .generate_summary(SAMPLE_TRANSCRIPT);

    assert_eq!(summarizer.generate_summary(SAMPLE_TRANSCRIPT), expected);
}

#[test]
fn test_save_summary_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let summarizer = Summarizer::extractive(SummarizerConfig::default()).unwrap();
    let summary = summarizer.generate_summary(SAMPLE_TRANSCRIPT);

    let path = summarizer
        .save_summary(&summary, dir.path(), "planning")
        .unwrap();

    assert_eq!(path, dir.path().join("planning_summary.txt"));
    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "Summary: planning");
    assert!(lines[1].starts_with("Generated: "));
    assert!(lines[1].ends_with(" IST"));
    assert_eq!(lines[2], "Mode: textrank");
    assert_eq!(lines[3], "=".repeat(60));
    assert!(contents.contains(&summary));
}

#[test]
fn test_save_summary_missing_folder_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = save_summary("text", &missing, "s", "textrank").unwrap_err();
    assert!(matches!(err, SummarizerError::Io { .. }));
}

#[test]
fn test_summary_stats() {
    let summary = generate_summary(SAMPLE_TRANSCRIPT, 3);
    let stats = SummaryStats::compute(SAMPLE_TRANSCRIPT, &summary);

    assert_eq!(stats.original_sentences, 10);
    assert_eq!(stats.summary_sentences, 3);
    assert!(stats.compression_ratio > 0.0 && stats.compression_ratio < 1.0);
}
