//! Batch orchestration: notes directory in, one summary file per note out.
//!
//! Files are processed one at a time, end to end. A file that fails (cannot
//! be read, or yields no keywords in any chunk) is logged and counted; the
//! batch carries on with the rest.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::keywords::Keyword;
use crate::notes::{self, TextStats};
use crate::paragraph::ParagraphChunker;
use crate::render::MarkdownWriter;
use crate::summary::{merge, merge_keywords, Summary, SummaryEngine, SummaryKind};
use crate::{Chunker, Error, Result};

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Note files found.
    pub discovered: usize,
    /// Files that produced a summary.
    pub succeeded: usize,
    /// Files skipped or failed.
    pub failed: usize,
    /// Written summary files, in processing order.
    pub outputs: Vec<PathBuf>,
}

/// Summarizes whole documents: chunking, per-chunk summaries, merging.
#[derive(Debug, Clone)]
pub struct DocumentSummarizer {
    engine: SummaryEngine,
    chunker: ParagraphChunker,
    kind: SummaryKind,
    max_keywords: usize,
}

impl DocumentSummarizer {
    /// Build from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkCapacity`] for inconsistent chunk sizes.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            engine: SummaryEngine::new(config.engine_options()),
            chunker: ParagraphChunker::new(config.capacity()?),
            kind: config.summary_kind,
            max_keywords: config.max_keywords,
        })
    }

    /// Summarize one preprocessed document.
    ///
    /// Returns `None` when no chunk yields keywords. The summary's keyword
    /// list is the merge of every chunk's keywords, up to `max_keywords`.
    pub fn summarize(&self, text: &str) -> Option<Summary> {
        let slabs = self.chunker.chunk(text);
        if slabs.len() > 1 {
            tracing::info!(chunks = slabs.len(), "long text split into chunks");
        }

        let total = slabs.len();
        let mut keyword_lists: Vec<Vec<Keyword>> = Vec::with_capacity(total);
        let mut summaries = Vec::with_capacity(total);

        for slab in &slabs {
            let chunk = slab.index + 1;
            let keywords = match self.engine.try_keywords(&slab.text) {
                Ok(keywords) if !keywords.is_empty() => keywords,
                Ok(_) => {
                    tracing::warn!(chunk, total, "no keywords passed the filters");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(chunk, total, error = %e, "keyword extraction failed");
                    continue;
                }
            };
            tracing::debug!(
                chunk,
                total,
                chars = slab.char_len(),
                keywords = keywords.len(),
                "chunk summarized"
            );

            summaries.push(self.engine.compose(&slab.text, self.kind, &keywords));
            keyword_lists.push(keywords);
        }

        let mut summary = merge(summaries, self.kind)?;
        let mut keywords = merge_keywords(keyword_lists.iter().map(Vec::as_slice));
        keywords.truncate(self.max_keywords);
        summary.set_keywords(keywords);
        Some(summary)
    }
}

/// Processes note files and writes their summaries.
#[derive(Debug, Clone)]
pub struct Pipeline {
    summarizer: DocumentSummarizer,
    writer: MarkdownWriter,
    simple_summary: bool,
}

impl Pipeline {
    /// Build the pipeline, creating the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error for inconsistent chunk sizes or an output directory
    /// that cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            summarizer: DocumentSummarizer::new(config)?,
            writer: MarkdownWriter::new(&config.output_dir)?,
            simple_summary: config.simple_summary,
        })
    }

    /// Summarize one file.
    ///
    /// Writes `<basename>_summary.md`, plus `<basename>_simple_summary.md`
    /// when `simple_summary` is set. Returns the main summary's path, or
    /// `Ok(None)` when the file has no usable text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableFile`] or an I/O error from writing.
    pub fn process_file(&self, path: &Path) -> Result<Option<PathBuf>> {
        tracing::info!(path = %path.display(), "processing note");

        let text = notes::preprocess(&notes::read(path)?);
        let stats = TextStats::of(&text);
        tracing::info!(
            chars = stats.char_count,
            words = stats.word_count,
            sentences = stats.sentence_count,
            "text statistics"
        );

        let Some(summary) = self.summarizer.summarize(&text) else {
            tracing::warn!(path = %path.display(), "no summary could be generated");
            return Ok(None);
        };

        let basename = MarkdownWriter::basename(path);
        let output = self.writer.write_summary(&basename, &summary)?;
        if self.simple_summary {
            let simple =
                self.writer
                    .write_simple_summary(&basename, summary.body(), summary.keywords())?;
            tracing::debug!(path = %simple.display(), "simple summary written");
        }
        tracing::info!(
            keywords = summary.keywords().len(),
            kind = %summary.kind(),
            "summary complete"
        );
        Ok(Some(output))
    }
}

/// Summarize every matching note under `config.notes_dir`.
///
/// # Errors
///
/// Returns [`Error::NoNotes`] when the notes directory is missing or has no
/// matching files, and setup errors from [`Pipeline::new`]. Per-file
/// failures are counted in the report instead.
pub fn run(config: &Config) -> Result<BatchReport> {
    if !config.notes_dir.is_dir() {
        return Err(Error::NoNotes(config.notes_dir.clone()));
    }

    let files = notes::scan(&config.notes_dir, &config.extensions);
    if files.is_empty() {
        return Err(Error::NoNotes(config.notes_dir.clone()));
    }
    tracing::info!(count = files.len(), extensions = ?config.extensions, "notes found");

    let pipeline = Pipeline::new(config)?;
    let mut report = BatchReport {
        discovered: files.len(),
        ..BatchReport::default()
    };

    for path in &files {
        match pipeline.process_file(path) {
            Ok(Some(output)) => {
                tracing::info!(output = %output.display(), "summary written");
                report.succeeded += 1;
                report.outputs.push(output);
            }
            Ok(None) => {
                tracing::warn!(path = %path.display(), "note skipped");
                report.failed += 1;
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "note failed");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded,
        total = report.discovered,
        output_dir = %config.output_dir.display(),
        "batch complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    fn config(kind: SummaryKind, chunk_size: usize) -> Config {
        Config {
            summary_kind: kind,
            language: Language::English,
            chunk_size,
            min_chunk_size: Some(chunk_size / 2),
            ..Config::default()
        }
    }

    const LECTURE: &str = "Rust guarantees memory safety without a garbage collector. \
        Ownership gives every value a single owner. \
        Borrowing lets functions use values without taking ownership. \
        Lifetimes ensure references never outlive their data.";

    #[test]
    fn test_short_document_single_chunk() {
        let summarizer = DocumentSummarizer::new(&config(SummaryKind::Mixed, 8000)).unwrap();
        let summary = summarizer.summarize(LECTURE).unwrap();
        assert_eq!(summary.kind(), SummaryKind::Mixed);
        assert!(summary.statistics().is_some());
        assert!(summary.keywords().len() <= 50);
    }

    #[test]
    fn test_long_document_is_merged() {
        let text = [LECTURE; 6].join("\n\n");
        let summarizer = DocumentSummarizer::new(&config(SummaryKind::Sentences, 300)).unwrap();
        let summary = summarizer.summarize(&text).unwrap();

        let content = summary.sentence_text().unwrap();
        // One selected-sentence run per chunk, joined in order.
        assert!(content.matches("Rust guarantees memory safety").count() >= 2);

        let mut terms: Vec<_> = summary.keywords().iter().map(|k| k.term.clone()).collect();
        let before = terms.len();
        terms.sort();
        terms.dedup();
        assert_eq!(terms.len(), before, "merged keywords must be unique");
    }

    #[test]
    fn test_bullet_list_document_is_chunked() {
        let text: String = (0..40)
            .map(|i| format!("- lecture topic {i} covers ownership and borrowing rules\n"))
            .collect();
        let summarizer = DocumentSummarizer::new(&config(SummaryKind::Sentences, 300)).unwrap();

        let slabs = summarizer.chunker.chunk(&text);
        assert!(slabs.len() >= 2);
        assert!(slabs.iter().all(|s| s.char_len() <= 300));

        let summary = summarizer.summarize(&text).unwrap();
        assert!(summary.keywords().iter().any(|k| k.term == "ownership"));
    }

    #[test]
    fn test_single_sentence_document_yields_nothing() {
        let summarizer = DocumentSummarizer::new(&config(SummaryKind::Keywords, 8000)).unwrap();
        assert!(summarizer.summarize("Just one sentence").is_none());
        assert!(summarizer.summarize("").is_none());
    }

    #[test]
    fn test_keyword_limit_applies_to_file() {
        let cfg = Config {
            max_keywords: 3,
            ..config(SummaryKind::Keywords, 8000)
        };
        let summary = DocumentSummarizer::new(&cfg).unwrap().summarize(LECTURE).unwrap();
        assert_eq!(summary.keywords().len(), 3);
    }

    #[test]
    fn test_simple_summary_written_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let note = dir.path().join("lecture.md");
        std::fs::write(&note, LECTURE).unwrap();

        let cfg = Config {
            output_dir: dir.path().join("out"),
            simple_summary: true,
            ..config(SummaryKind::Sentences, 8000)
        };
        let output = Pipeline::new(&cfg).unwrap().process_file(&note).unwrap().unwrap();
        assert_eq!(output, cfg.output_dir.join("lecture_summary.md"));

        let simple =
            std::fs::read_to_string(cfg.output_dir.join("lecture_simple_summary.md")).unwrap();
        assert!(simple.starts_with("# lecture Brief Summary"));
        assert!(simple.contains("## Top Keywords"));

        let plain = Config {
            output_dir: dir.path().join("plain"),
            ..config(SummaryKind::Sentences, 8000)
        };
        Pipeline::new(&plain).unwrap().process_file(&note).unwrap();
        assert!(!plain.output_dir.join("lecture_simple_summary.md").exists());
    }

    #[test]
    fn test_run_missing_directory() {
        let cfg = Config {
            notes_dir: PathBuf::from("/no/such/notes"),
            ..Config::default()
        };
        assert!(matches!(run(&cfg), Err(Error::NoNotes(_))));
    }
}
