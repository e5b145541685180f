//! End-to-end tests: notes directory in, Markdown summaries out.

use std::fs;
use std::path::Path;

use notesum::{
    batch, compression_ratio, preprocess, split_sentences, Config, Error, KeywordExtractor,
    Language, ParagraphChunker, SentenceRanker, SummaryEngine, SummaryKind, TopicGroups,
    NO_SENTENCES,
};

const RUST_NOTE: &str = "# Ownership\n\n\
    Rust programs manage memory through ownership. \
    Every value in Rust has exactly one owner. \
    When the owner goes out of scope the value is dropped.\n\n\
    ## Borrowing\n\n\
    References borrow a value without taking ownership. \
    The borrow checker rejects references that outlive their value.";

const NETWORK_NOTE: &str = "TCP provides reliable ordered delivery. \
    UDP trades reliability for lower latency. \
    Applications choose TCP or UDP based on latency needs.";

fn config(notes: &Path, out: &Path, kind: SummaryKind) -> Config {
    Config {
        notes_dir: notes.to_path_buf(),
        output_dir: out.to_path_buf(),
        summary_kind: kind,
        language: Language::English,
        ..Config::default()
    }
}

#[test]
fn batch_writes_one_summary_per_note() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    let out = dir.path().join("summaries");
    fs::create_dir_all(notes.join("week2")).unwrap();
    fs::write(notes.join("rust.md"), RUST_NOTE).unwrap();
    fs::write(notes.join("week2").join("network.txt"), NETWORK_NOTE).unwrap();
    fs::write(notes.join("ignored.pdf"), NETWORK_NOTE).unwrap();

    let report = batch::run(&config(&notes, &out, SummaryKind::Mixed)).unwrap();
    assert_eq!(report.discovered, 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);

    let doc = fs::read_to_string(out.join("rust_summary.md")).unwrap();
    assert!(doc.starts_with("# rust Summary"));
    for heading in [
        "## Key Content",
        "## Keyword Summary",
        "## Keywords by Topic",
        "## Core Concepts",
        "## Summary Statistics",
        "## Keyword Details",
    ] {
        assert!(doc.contains(heading), "missing {heading}");
    }
    // Markdown syntax is stripped before weighting.
    assert!(!doc.contains("**#"));
    assert!(out.join("network_summary.md").is_file());
}

#[test]
fn batch_counts_partial_failures() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    let out = dir.path().join("out");
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("good.txt"), NETWORK_NOTE).unwrap();
    fs::write(notes.join("short.txt"), "Only a single sentence here").unwrap();
    fs::write(notes.join("empty.md"), "").unwrap();

    let report = batch::run(&config(&notes, &out, SummaryKind::Keywords)).unwrap();
    assert_eq!(report.discovered, 3);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 2);
    assert_eq!(report.outputs, [out.join("good_summary.md")]);
    assert!(!out.join("short_summary.md").exists());
}

#[test]
fn batch_rejects_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("readme.pdf"), "x").unwrap();

    let err = batch::run(&config(&notes, &dir.path().join("out"), SummaryKind::Mixed)).unwrap_err();
    assert!(matches!(err, Error::NoNotes(_)));
}

#[test]
fn long_note_without_blank_lines_is_chunked() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    let out = dir.path().join("out");
    fs::create_dir_all(&notes).unwrap();
    let body = format!("{NETWORK_NOTE} ").repeat(8);
    fs::write(notes.join("long.txt"), &body).unwrap();

    let cfg = Config {
        chunk_size: 300,
        min_chunk_size: Some(200),
        ..config(&notes, &out, SummaryKind::Sentences)
    };
    let report = batch::run(&cfg).unwrap();
    assert_eq!(report.succeeded, 1);

    let doc = fs::read_to_string(out.join("long_summary.md")).unwrap();
    assert!(doc.contains("## Sentence Summary"));
    assert!(doc.contains("## Keyword Details"));
}

#[test]
fn korean_note_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    let out = dir.path().join("out");
    fs::create_dir_all(&notes).unwrap();
    fs::write(
        notes.join("ai.md"),
        "인공지능 개념은 중요하다. 인공지능 기술은 발전한다. 머신러닝 응용은 다양하다.",
    )
    .unwrap();

    let cfg = Config {
        language: Language::Korean,
        ..config(&notes, &out, SummaryKind::Mixed)
    };
    let report = batch::run(&cfg).unwrap();
    assert_eq!(report.succeeded, 1);

    let doc = fs::read_to_string(out.join("ai_summary.md")).unwrap();
    assert!(doc.contains("인공지능"));
}

#[test]
fn ranker_keeps_document_order() {
    let text = "AI is powerful. AI improves efficiency. Efficiency matters most.";
    let ranked = SentenceRanker::new().rank(text, 2);
    let indices: Vec<_> = ranked.iter().map(|r| r.sentence.index).collect();
    assert_eq!(indices, [0, 2]);
    // The first and last sentences tie on score and beat the middle one.
    assert!((ranked[0].score - ranked[1].score).abs() < 1e-9);

    assert_eq!(
        SentenceRanker::new().summarize(text, 2),
        "AI is powerful Efficiency matters most"
    );
}

#[test]
fn single_sentence_input() {
    let text = "Just one sentence without a terminator";
    assert!(KeywordExtractor::new(Language::English).extract(text, 10).is_empty());
    assert_eq!(SentenceRanker::new().summarize(text, 3), NO_SENTENCES);
}

#[test]
fn empty_input_every_stage() {
    assert!(split_sentences("").is_empty());
    assert!(KeywordExtractor::default().extract("", 10).is_empty());
    assert_eq!(SentenceRanker::new().summarize("", 3), NO_SENTENCES);
    assert!(TopicGroups::classify(&[]).is_empty());
    assert!(ParagraphChunker::default().split("").is_empty());
    assert_eq!(preprocess(""), "");
    assert!(matches!(compression_ratio("", ""), Err(Error::DivisionByZero)));

    let engine = SummaryEngine::default();
    for kind in [SummaryKind::Keywords, SummaryKind::Sentences, SummaryKind::Mixed] {
        let summary = engine.summarize("", kind);
        assert!(summary.keywords().is_empty());
        if let Some(stats) = summary.statistics() {
            assert_eq!(stats.compression_ratio, 0.0);
        }
    }
}
