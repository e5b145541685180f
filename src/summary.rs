//! Summary composition and multi-chunk merging.
//!
//! ## Summary Shapes
//!
//! | Kind | Body | Extras |
//! |------|------|--------|
//! | `keywords` | core/main keyword lines | top 15 core concepts |
//! | `sentences` | ranked sentences, document order | top 15 core concepts |
//! | `mixed` | sentences + keyword lines + topic groups | top 10 core concepts, statistics |
//!
//! Every shape carries the top 20 keywords by score.
//!
//! ## Merging
//!
//! Long documents are chunked and each chunk is summarized on its own.
//! [`merge`] folds the per-chunk summaries back into one:
//!
//! ```text
//! chunk 0: [rust 0.31, memory 0.22]      chunk 1: [rust 0.18, borrow 0.25]
//!                       \                    /
//!              concatenate, last score per term wins
//!                               |
//!              [borrow 0.25, memory 0.22, rust 0.18]
//! ```
//!
//! Keyword scores are not combined: a term repeated in a later chunk keeps
//! that chunk's score. Sentence summaries are joined in chunk order. For
//! `mixed`, the topic groups are regrouped from the merged keywords and the
//! statistics are summed over chunks, with the compression ratio taken over
//! the merged sentence summary.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keywords::{Keyword, KeywordExtractor};
use crate::rank::SentenceRanker;
use crate::segment::split_sentences;
use crate::stopwords::Language;
use crate::topics::TopicGroups;
use crate::{Error, Result};

/// Keywords kept on every summary record.
pub const SUMMARY_KEYWORDS: usize = 20;

/// Core concepts listed for `keywords`/`sentences` summaries and merges.
pub const CORE_CONCEPTS: usize = 15;

/// Core concepts listed for a single-chunk `mixed` summary.
pub const MIXED_CORE_CONCEPTS: usize = 10;

/// Body of a keyword summary when there are no keywords.
pub const NO_KEYWORDS: &str = "Could not extract keywords.";

/// The shape of summary to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    /// Keyword lines only.
    Keywords,
    /// Ranked sentences only.
    Sentences,
    /// Sentences, keywords, topic groups and statistics.
    #[default]
    Mixed,
}

impl SummaryKind {
    /// The lowercase name used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Sentences => "sentences",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keywords" => Ok(Self::Keywords),
            "sentences" => Ok(Self::Sentences),
            "mixed" => Ok(Self::Mixed),
            other => Err(Error::UnknownSummaryKind(other.to_string())),
        }
    }
}

/// Size and compression figures for a `mixed` summary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Sentences in the original text.
    pub sentence_count: usize,
    /// Whitespace-separated words in the original text.
    pub word_count: usize,
    /// Characters in the original text.
    pub char_count: usize,
    /// `.`-delimited pieces of the sentence summary.
    ///
    /// A rough proxy: it counts the empty piece after a trailing period too.
    pub summary_sentence_count: usize,
    /// Summary length as a percentage of the original, one decimal place.
    pub compression_ratio: f64,
}

impl Statistics {
    /// Measure `text` against its sentence summary.
    ///
    /// An empty `text` gives a compression ratio of 0.
    pub fn compute(text: &str, sentence_summary: &str) -> Self {
        let char_count = text.chars().count();
        Self {
            sentence_count: split_sentences(text).len(),
            word_count: text.split_whitespace().count(),
            char_count,
            summary_sentence_count: sentence_summary.split('.').count(),
            compression_ratio: guarded_ratio(sentence_summary.chars().count(), char_count),
        }
    }
}

/// Length of `summary` as a percentage of `original`, rounded to 0.1.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `original` is empty.
///
/// ```rust
/// use notesum::compression_ratio;
///
/// assert_eq!(compression_ratio("abc", "abcdefghij").unwrap(), 30.0);
/// assert!(compression_ratio("abc", "").is_err());
/// ```
pub fn compression_ratio(summary: &str, original: &str) -> Result<f64> {
    ratio(summary.chars().count(), original.chars().count())
}

fn ratio(summary_chars: usize, original_chars: usize) -> Result<f64> {
    if original_chars == 0 {
        return Err(Error::DivisionByZero);
    }
    let percent = summary_chars as f64 / original_chars as f64 * 100.0;
    Ok((percent * 10.0).round() / 10.0)
}

fn guarded_ratio(summary_chars: usize, original_chars: usize) -> f64 {
    ratio(summary_chars, original_chars).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "compression ratio set to 0");
        0.0
    })
}

/// A summary of one chunk or one whole document.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    /// Keyword-only summary.
    Keywords {
        /// Rendered keyword lines.
        content: String,
        /// Top keywords, descending by score.
        keywords: Vec<Keyword>,
        /// Leading keyword terms.
        core_concepts: Vec<String>,
    },
    /// Sentence-only summary.
    Sentences {
        /// Selected sentences joined by spaces.
        content: String,
        /// Top keywords, descending by score.
        keywords: Vec<Keyword>,
        /// Leading keyword terms.
        core_concepts: Vec<String>,
    },
    /// Combined summary.
    Mixed {
        /// Selected sentences joined by spaces.
        sentence_summary: String,
        /// Rendered keyword lines.
        keyword_summary: String,
        /// Rendered topic groups.
        topic_summary: String,
        /// Leading keyword terms.
        core_concepts: Vec<String>,
        /// Size and compression figures.
        statistics: Statistics,
        /// Top keywords, descending by score.
        keywords: Vec<Keyword>,
    },
}

impl Summary {
    /// Which shape this is.
    pub fn kind(&self) -> SummaryKind {
        match self {
            Self::Keywords { .. } => SummaryKind::Keywords,
            Self::Sentences { .. } => SummaryKind::Sentences,
            Self::Mixed { .. } => SummaryKind::Mixed,
        }
    }

    /// Keywords, descending by score.
    pub fn keywords(&self) -> &[Keyword] {
        match self {
            Self::Keywords { keywords, .. }
            | Self::Sentences { keywords, .. }
            | Self::Mixed { keywords, .. } => keywords,
        }
    }

    /// Replace the keyword list.
    pub fn set_keywords(&mut self, new: Vec<Keyword>) {
        match self {
            Self::Keywords { keywords, .. }
            | Self::Sentences { keywords, .. }
            | Self::Mixed { keywords, .. } => *keywords = new,
        }
    }

    /// Core concept terms.
    pub fn core_concepts(&self) -> &[String] {
        match self {
            Self::Keywords { core_concepts, .. }
            | Self::Sentences { core_concepts, .. }
            | Self::Mixed { core_concepts, .. } => core_concepts,
        }
    }

    /// The sentence summary, for shapes that have one.
    pub fn sentence_text(&self) -> Option<&str> {
        match self {
            Self::Sentences { content, .. } => Some(content),
            Self::Mixed {
                sentence_summary, ..
            } => Some(sentence_summary),
            Self::Keywords { .. } => None,
        }
    }

    /// The main body: keyword lines, selected sentences, or the key content
    /// of a mixed summary.
    pub fn body(&self) -> &str {
        match self {
            Self::Keywords { content, .. } | Self::Sentences { content, .. } => content,
            Self::Mixed {
                sentence_summary, ..
            } => sentence_summary,
        }
    }

    /// Statistics, for `mixed` summaries.
    pub fn statistics(&self) -> Option<&Statistics> {
        match self {
            Self::Mixed { statistics, .. } => Some(statistics),
            _ => None,
        }
    }
}

fn terms(keywords: &[Keyword], n: usize) -> Vec<String> {
    keywords.iter().take(n).map(|k| k.term.clone()).collect()
}

fn join_terms(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .map(|k| k.term.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn top(keywords: &[Keyword], n: usize) -> Vec<Keyword> {
    keywords.iter().take(n).cloned().collect()
}

/// Render keyword lines: the top 5 as core, the next 10 as main.
///
/// Only the first `max_keywords` keywords are considered.
pub fn keyword_summary(keywords: &[Keyword], max_keywords: usize) -> String {
    if keywords.is_empty() {
        return NO_KEYWORDS.to_string();
    }

    let considered = &keywords[..keywords.len().min(max_keywords)];
    let core = &considered[..considered.len().min(5)];
    let mut parts = vec![format!("**Core keywords**: {}", join_terms(core))];

    if considered.len() > 5 {
        let main = &considered[5..considered.len().min(15)];
        parts.push(format!("**Main keywords**: {}", join_terms(main)));
    }

    parts.join("\n\n")
}

/// Concatenate keyword lists and drop repeated terms.
///
/// A repeated term keeps its first position but takes the score of its
/// last occurrence. The result is sorted by descending score; the sort is
/// stable, so ties stay in first-seen order.
pub fn merge_keywords<'a>(lists: impl IntoIterator<Item = &'a [Keyword]>) -> Vec<Keyword> {
    let mut merged: Vec<Keyword> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for keyword in lists.into_iter().flatten() {
        if let Some(&i) = positions.get(&keyword.term) {
            merged[i].score = keyword.score;
        } else {
            positions.insert(keyword.term.clone(), merged.len());
            merged.push(keyword.clone());
        }
    }

    merged.sort_by(|a, b| b.score.total_cmp(&a.score));
    merged
}

/// Engine-wide settings, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Language for stopword filtering.
    pub language: Language,
    /// Keywords extracted per chunk.
    pub max_keywords: usize,
    /// Sentences selected for sentence summaries.
    pub summary_sentences: usize,
    /// Reproducibility seed. No current step is randomized.
    pub seed: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_keywords: 50,
            summary_sentences: 5,
            seed: 42,
        }
    }
}

/// Builds per-chunk summaries.
///
/// Holds the stopword set and weighting configuration; construct once and
/// reuse across chunks and files.
///
/// ```rust
/// use notesum::{EngineOptions, Language, SummaryEngine, SummaryKind};
///
/// let engine = SummaryEngine::new(EngineOptions {
///     language: Language::English,
///     ..EngineOptions::default()
/// });
/// let text = "Rust has ownership. Ownership prevents leaks. Borrowing shares data.";
/// let summary = engine.summarize(text, SummaryKind::Mixed);
///
/// assert_eq!(summary.kind(), SummaryKind::Mixed);
/// assert!(!summary.keywords().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    options: EngineOptions,
    extractor: KeywordExtractor,
    ranker: SentenceRanker,
}

impl SummaryEngine {
    /// Create an engine.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            extractor: KeywordExtractor::new(options.language),
            ranker: SentenceRanker::new(),
        }
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Extract up to `max_keywords` keywords from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] when `text` cannot be weighted.
    pub fn try_keywords(&self, text: &str) -> Result<Vec<Keyword>> {
        self.extractor.try_extract(text, self.options.max_keywords)
    }

    /// Extract up to `max_keywords` keywords, empty on degenerate input.
    pub fn keywords(&self, text: &str) -> Vec<Keyword> {
        self.extractor.extract(text, self.options.max_keywords)
    }

    /// The ranked-sentence summary of `text`.
    pub fn sentence_summary(&self, text: &str) -> String {
        self.ranker.summarize(text, self.options.summary_sentences)
    }

    /// Summarize `text` as `kind`, extracting keywords first.
    pub fn summarize(&self, text: &str, kind: SummaryKind) -> Summary {
        let keywords = self.keywords(text);
        self.compose(text, kind, &keywords)
    }

    /// Summarize `text` as `kind` from already extracted keywords.
    pub fn compose(&self, text: &str, kind: SummaryKind, keywords: &[Keyword]) -> Summary {
        match kind {
            SummaryKind::Keywords => Summary::Keywords {
                content: keyword_summary(keywords, SUMMARY_KEYWORDS),
                keywords: top(keywords, SUMMARY_KEYWORDS),
                core_concepts: terms(keywords, CORE_CONCEPTS),
            },
            SummaryKind::Sentences => Summary::Sentences {
                content: self.sentence_summary(text),
                keywords: top(keywords, SUMMARY_KEYWORDS),
                core_concepts: terms(keywords, CORE_CONCEPTS),
            },
            SummaryKind::Mixed => {
                let sentence_summary = self.sentence_summary(text);
                let statistics = Statistics::compute(text, &sentence_summary);
                Summary::Mixed {
                    keyword_summary: keyword_summary(keywords, SUMMARY_KEYWORDS),
                    topic_summary: TopicGroups::classify(keywords).render(),
                    core_concepts: terms(keywords, MIXED_CORE_CONCEPTS),
                    statistics,
                    keywords: top(keywords, SUMMARY_KEYWORDS),
                    sentence_summary,
                }
            }
        }
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

/// Fold per-chunk summaries of one document into a single summary.
///
/// Returns `None` for an empty input and the summary itself for a single
/// chunk. Summaries of a different shape than `kind` contribute only their
/// keywords.
pub fn merge(mut summaries: Vec<Summary>, kind: SummaryKind) -> Option<Summary> {
    match summaries.len() {
        0 => return None,
        1 => return summaries.pop(),
        _ => {}
    }

    let keywords = merge_keywords(summaries.iter().map(Summary::keywords));
    let sentences = summaries
        .iter()
        .filter_map(Summary::sentence_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let merged = match kind {
        SummaryKind::Keywords => {
            let content = format!(
                "**Core keywords**: {}\n\n**Main keywords**: {}",
                join_terms(&keywords[..keywords.len().min(10)]),
                join_terms(&keywords[keywords.len().min(10)..keywords.len().min(20)]),
            );
            Summary::Keywords {
                content,
                core_concepts: terms(&keywords, CORE_CONCEPTS),
                keywords: top(&keywords, SUMMARY_KEYWORDS),
            }
        }
        SummaryKind::Sentences => Summary::Sentences {
            content: sentences,
            core_concepts: terms(&keywords, CORE_CONCEPTS),
            keywords: top(&keywords, SUMMARY_KEYWORDS),
        },
        SummaryKind::Mixed => {
            let mut statistics = summaries
                .iter()
                .filter_map(Summary::statistics)
                .fold(Statistics::default(), |mut acc, s| {
                    acc.sentence_count += s.sentence_count;
                    acc.word_count += s.word_count;
                    acc.char_count += s.char_count;
                    acc
                });
            statistics.summary_sentence_count = sentences.split('.').count();
            statistics.compression_ratio =
                guarded_ratio(sentences.chars().count(), statistics.char_count);

            Summary::Mixed {
                keyword_summary: format!(
                    "**Core keywords**: {}",
                    join_terms(&keywords[..keywords.len().min(10)])
                ),
                topic_summary: TopicGroups::classify(&keywords).render(),
                core_concepts: terms(&keywords, CORE_CONCEPTS),
                statistics,
                keywords: top(&keywords, SUMMARY_KEYWORDS),
                sentence_summary: sentences,
            }
        }
    };

    Some(merged)
}
