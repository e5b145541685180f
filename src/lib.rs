//! # notesum
//!
//! Offline, rule-based summaries of lecture notes.
//!
//! ## The Problem
//!
//! A folder of lecture notes grows faster than anyone re-reads it. What you
//! want per note is a short page: the terms that matter, the sentences that
//! carry the most content, and a rough grouping of the terms by topic. No
//! network, no model download, same output every run.
//!
//! ## The Pipeline
//!
//! ```text
//! note file ──read/decode──> text ──preprocess──> clean text
//!                                                     │
//!                             longer than chunk_size? │
//!                          ┌──────────────yes─────────┴──no──┐
//!                          ▼                                 ▼
//!                 ParagraphChunker                     single chunk
//!                          │                                 │
//!                          └──────────────┬──────────────────┘
//!                                         ▼
//!                    per chunk: keywords + compose(kind)
//!                                         │
//!                                  merge(kind) ──> <note>_summary.md
//! ```
//!
//! ### Keywords
//!
//! Sentences are weighted with TF-IDF over unigrams and bigrams (smoothed
//! IDF, L2-normalized rows). A term's score is its mean weight across
//! sentences. Only unigram candidates of two or more alphanumeric
//! characters that are neither stopwords nor pure numbers survive.
//!
//! ### Important Sentences
//!
//! Each sentence scores the sum of its TF-IDF row. The top `n` are kept
//! and put back in document order.
//!
//! ### Topics
//!
//! Keywords are bucketed into concept, feature, application and technique
//! groups by substring markers; the rest land in "Other".
//!
//! ## Quick Start
//!
//! ```rust
//! use notesum::{EngineOptions, Language, SummaryEngine, SummaryKind};
//!
//! let engine = SummaryEngine::new(EngineOptions {
//!     language: Language::English,
//!     ..EngineOptions::default()
//! });
//!
//! let text = "Rust programs are fast. Rust prevents data races. \
//!             Cargo builds Rust programs.";
//! let summary = engine.summarize(text, SummaryKind::Mixed);
//!
//! assert_eq!(summary.keywords()[0].term, "rust");
//! assert!(summary.statistics().is_some());
//! ```
//!
//! ## Batch Runs
//!
//! ```rust,no_run
//! use notesum::{batch, Config};
//!
//! let config = Config::load(None)?;
//! let report = batch::run(&config)?;
//! println!("{}/{} notes summarized", report.succeeded, report.discovered);
//! # Ok::<(), notesum::Error>(())
//! ```

pub mod batch;
mod capacity;
pub mod config;
mod error;
mod keywords;
pub mod notes;
mod paragraph;
mod rank;
pub mod render;
mod segment;
mod slab;
mod stopwords;
mod summary;
mod topics;
mod weight;

pub use batch::{BatchReport, DocumentSummarizer, Pipeline};
pub use capacity::{ChunkCapacity, ChunkCapacityError};
pub use config::Config;
pub use error::{Error, Result};
pub use keywords::{Keyword, KeywordExtractor};
pub use notes::{preprocess, TextStats};
pub use paragraph::ParagraphChunker;
pub use rank::{RankedSentence, SentenceRanker, NO_SENTENCES};
pub use render::MarkdownWriter;
pub use segment::{sentence_texts, split_keeping_terminators, split_sentences, Sentence};
pub use slab::Slab;
pub use stopwords::{Language, StopwordFilter};
pub use summary::{
    compression_ratio, keyword_summary, merge, merge_keywords, EngineOptions, Statistics, Summary,
    SummaryEngine, SummaryKind, CORE_CONCEPTS, NO_KEYWORDS,
};
pub use topics::{Topic, TopicGroups};
pub use weight::{tokenize, TermMatrix, TermWeighter};

/// A text chunking strategy.
///
/// Slabs come back in source order with sequential indices.
///
/// ```rust
/// use notesum::{ChunkCapacity, Chunker, ParagraphChunker};
///
/// fn chunk_note(chunker: &dyn Chunker, text: &str) -> Vec<notesum::Slab> {
///     chunker.chunk(text)
/// }
///
/// let chunker = ParagraphChunker::new(ChunkCapacity::from(10..=30));
/// let slabs = chunk_note(&chunker, "First paragraph here.\n\nSecond one here.");
/// assert_eq!(slabs.len(), 2);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    fn chunk(&self, text: &str) -> Vec<Slab>;
}
