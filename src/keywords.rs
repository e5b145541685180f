//! Keyword extraction from TF-IDF term weights.
//!
//! A weighted term becomes a keyword when it:
//!
//! - is at least two characters long,
//! - is not a stopword for the active language,
//! - is not purely numeric,
//! - consists only of alphanumeric characters.
//!
//! The last rule rejects every bigram (they contain a space), so keywords
//! are unigrams in practice. Bigrams still shape the weights: they take part
//! in each sentence's L2 normalization.
//!
//! Candidates are ordered by descending mean weight. The sort is stable, so
//! equal scores keep the weighter's vocabulary order.

use std::fmt;

use crate::segment::split_sentences;
use crate::stopwords::{Language, StopwordFilter};
use crate::weight::{TermMatrix, TermWeighter};
use crate::{Error, Result};

/// A keyword and its importance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// Lowercased term.
    pub term: String,
    /// Mean TF-IDF weight, non-negative.
    pub score: f64,
}

impl Keyword {
    /// Create a new keyword.
    #[must_use]
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.term, self.score)
    }
}

/// Ranks and filters weighted terms into keywords.
///
/// ```rust
/// use notesum::{KeywordExtractor, Language};
///
/// let extractor = KeywordExtractor::new(Language::English);
/// let keywords = extractor.extract(
///     "Rust is fast. Rust is safe. Python is popular.",
///     5,
/// );
/// assert_eq!(keywords[0].term, "rust");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    weighter: TermWeighter,
    stopwords: StopwordFilter,
}

impl KeywordExtractor {
    /// Create an extractor with the default weighter for `language`.
    pub fn new(language: Language) -> Self {
        Self {
            weighter: TermWeighter::default(),
            stopwords: StopwordFilter::new(language),
        }
    }

    /// Replace the term weighter.
    #[must_use]
    pub fn with_weighter(mut self, weighter: TermWeighter) -> Self {
        self.weighter = weighter;
        self
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.stopwords.language()
    }

    /// Whether `term` may be reported as a keyword.
    pub fn is_candidate(&self, term: &str) -> bool {
        term.chars().count() >= 2
            && !self.stopwords.is_stopword(term)
            && !term.chars().all(char::is_numeric)
            && term.chars().all(char::is_alphanumeric)
    }

    /// Extract up to `top_k` keywords from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] when `text` has fewer than two
    /// sentences or no word tokens.
    pub fn try_extract(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        let sentences = split_sentences(text);
        let matrix = self.weighter.fit(&sentences)?;
        Ok(self.select(&matrix, top_k))
    }

    /// Extract up to `top_k` keywords, treating degenerate input as "none".
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        match self.try_extract(text, top_k) {
            Ok(keywords) => keywords,
            Err(Error::InsufficientData(reason)) => {
                tracing::debug!(reason, "no keywords extracted");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "keyword extraction failed");
                Vec::new()
            }
        }
    }

    /// Rank the terms of an already weighted matrix.
    pub fn select(&self, matrix: &TermMatrix, top_k: usize) -> Vec<Keyword> {
        let mut weights = matrix.mean_weights();
        weights.sort_by(|a, b| b.1.total_cmp(&a.1));

        weights
            .into_iter()
            .filter(|(term, _)| self.is_candidate(term))
            .take(top_k)
            .map(|(term, score)| Keyword::new(term, score))
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> KeywordExtractor {
        KeywordExtractor::new(Language::English)
    }

    #[test]
    fn test_candidate_rules() {
        let extractor = english();
        assert!(extractor.is_candidate("rust"));
        assert!(extractor.is_candidate("gpt4"));
        assert!(!extractor.is_candidate("x"));
        assert!(!extractor.is_candidate("the"));
        assert!(!extractor.is_candidate("2024"));
        assert!(!extractor.is_candidate("machine learning"));
        assert!(!extractor.is_candidate("snake_case"));
    }

    #[test]
    fn test_korean_candidates() {
        let extractor = KeywordExtractor::new(Language::Korean);
        assert!(extractor.is_candidate("인공지능"));
        assert!(!extractor.is_candidate("에서"));
        assert!(!extractor.is_candidate("것"));
    }

    #[test]
    fn test_extract_orders_by_score() {
        let keywords = english().extract(
            "Neural networks learn. Neural networks generalize. Trees split data.",
            10,
        );
        assert!(!keywords.is_empty());
        for pair in keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(keywords.iter().all(|k| !k.term.contains(' ')));
    }

    #[test]
    fn test_top_k_limits_output() {
        let keywords = english().extract(
            "alpha beta gamma delta. epsilon zeta eta theta. iota kappa lambda mu.",
            3,
        );
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_equal_scores_keep_vocabulary_order() {
        // Symmetric sentences give every unigram the same weight.
        let keywords = english().extract("delta charlie. bravo alpha.", 10);
        let terms: Vec<_> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, ["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_single_sentence_yields_nothing() {
        let extractor = english();
        assert!(extractor.extract("Just one sentence here", 10).is_empty());
        assert!(matches!(
            extractor.try_extract("Just one sentence here", 10),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(english().extract("", 10).is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Ownership moves values. Borrowing lends values. Lifetimes bound borrows.";
        let extractor = english();
        assert_eq!(extractor.extract(text, 20), extractor.extract(text, 20));
    }
}
