//! Importance-ranked sentence selection.
//!
//! A sentence's score is the sum of its own normalized TF-IDF row. Because
//! every row has unit L2 length, the sum rewards sentences whose weight is
//! spread over many distinctive terms rather than concentrated in one.
//!
//! Selection keeps the top `n` by score (earlier sentences win ties) and
//! then restores document order using each sentence's index:
//!
//! ```text
//! scores:    s0=1.9  s1=2.4  s2=1.1  s3=2.2
//! top 2:     s1, s3
//! returned:  s1, s3   (document order, not score order)
//! ```

use crate::segment::{split_sentences, Sentence};
use crate::weight::TermWeighter;

/// Returned by [`SentenceRanker::summarize`] when nothing can be ranked.
pub const NO_SENTENCES: &str = "Could not extract important sentences.";

/// A selected sentence with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// The sentence and its position in the text.
    pub sentence: Sentence,
    /// Sum of the sentence's TF-IDF row.
    pub score: f64,
}

/// Selects the most important sentences of a text.
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    weighter: TermWeighter,
}

impl SentenceRanker {
    /// Create a ranker with the default term weighter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the term weighter.
    #[must_use]
    pub fn with_weighter(mut self, weighter: TermWeighter) -> Self {
        self.weighter = weighter;
        self
    }

    /// Score every sentence of `text` and return the best `n` in document order.
    ///
    /// Returns an empty vector when the text cannot be weighted (fewer than
    /// two sentences, or no word tokens).
    pub fn rank(&self, text: &str, n: usize) -> Vec<RankedSentence> {
        let sentences = split_sentences(text);
        let matrix = match self.weighter.fit(&sentences) {
            Ok(matrix) => matrix,
            Err(e) => {
                tracing::debug!(error = %e, "sentence ranking skipped");
                return Vec::new();
            }
        };

        let mut scored: Vec<RankedSentence> = sentences
            .into_iter()
            .zip(matrix.row_sums())
            .map(|(sentence, score)| RankedSentence { sentence, score })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(n);
        scored.sort_by_key(|r| r.sentence.index);
        scored
    }

    /// Join the best `n` sentences of `text` with single spaces.
    ///
    /// ```rust
    /// use notesum::SentenceRanker;
    ///
    /// let ranker = SentenceRanker::new();
    /// assert_eq!(
    ///     ranker.summarize("Only one sentence", 3),
    ///     notesum::NO_SENTENCES,
    /// );
    /// ```
    pub fn summarize(&self, text: &str, n: usize) -> String {
        let ranked = self.rank(text, n);
        if ranked.is_empty() {
            return NO_SENTENCES.to_string();
        }
        ranked
            .iter()
            .map(|r| r.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_restores_document_order() {
        let ranker = SentenceRanker::new();
        let text = "AI is powerful. AI improves efficiency. Efficiency matters most.";
        let ranked = ranker.rank(text, 2);

        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].sentence.index < ranked[1].sentence.index);

        // The dropped sentence scores no higher than either kept one.
        let all = ranker.rank(text, 3);
        let kept: Vec<_> = ranked.iter().map(|r| r.sentence.index).collect();
        let dropped = all.iter().find(|r| !kept.contains(&r.sentence.index)).unwrap();
        assert!(ranked.iter().all(|r| r.score >= dropped.score));
    }

    #[test]
    fn test_summary_is_space_joined() {
        let ranker = SentenceRanker::new();
        let summary = ranker.summarize("First point here. Second point there.", 5);
        assert_eq!(summary, "First point here Second point there");
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let ranker = SentenceRanker::new();
        // Structurally identical sentences score identically.
        let ranked = ranker.rank("aa bb. cc dd. ee ff.", 2);
        let indices: Vec<_> = ranked.iter().map(|r| r.sentence.index).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn test_single_sentence_falls_back() {
        assert_eq!(SentenceRanker::new().summarize("Alone.", 5), NO_SENTENCES);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let ranker = SentenceRanker::new();
        assert!(ranker.rank("", 5).is_empty());
        assert_eq!(ranker.summarize("", 5), NO_SENTENCES);
    }

    #[test]
    fn test_zero_requested() {
        assert!(SentenceRanker::new().rank("One. Two.", 0).is_empty());
    }
}
