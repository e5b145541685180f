//! TF-IDF term weighting over a set of sentences.
//!
//! Each sentence is one "document". Terms are lowercased `\w+` tokens and
//! the bigrams formed from adjacent tokens (joined by a single space).
//!
//! ```text
//! tf(t, s)  = raw count of t in sentence s
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//! row(s)    = L2-normalize([tf(t, s) * idf(t) for t in vocabulary])
//! weight(t) = mean over sentences of row(s)[t]
//! ```
//!
//! The smoothed IDF never reaches zero, so a term that appears in every
//! sentence still carries weight; it just ranks below rarer terms with the
//! same raw count.
//!
//! ## Vocabulary
//!
//! At most `max_features` terms are kept, chosen by total count across all
//! sentences (ties broken alphabetically). The kept vocabulary is then
//! enumerated in ascending term order, and every output of this module
//! follows that order. Nothing is retained between calls: each chunk of a
//! long document gets its own vocabulary.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\w+").expect("token regex"))
}

/// Lowercase `text` and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// TF-IDF weighter configuration.
///
/// Construct once and reuse; [`TermWeighter::fit`] takes `&self`.
#[derive(Debug, Clone)]
pub struct TermWeighter {
    ngram_range: (usize, usize),
    max_features: usize,
}

impl Default for TermWeighter {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl TermWeighter {
    /// Create a weighter over unigrams and bigrams.
    ///
    /// # Panics
    ///
    /// Panics if `max_features == 0`.
    #[must_use]
    pub fn new(max_features: usize) -> Self {
        assert!(max_features > 0, "max_features must be > 0");
        Self {
            ngram_range: (1, 2),
            max_features,
        }
    }

    /// Set the n-gram range (inclusive). Values below 1 are raised to 1.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    /// Maximum vocabulary size.
    pub fn max_features(&self) -> usize {
        self.max_features
    }

    fn ngrams(&self, tokens: &[String]) -> Vec<String> {
        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n {
            if n == 1 {
                grams.extend(tokens.iter().cloned());
            } else {
                grams.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        grams
    }

    /// Weight every term across `sentences`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fewer than two sentences or
    /// when no sentence contains a single token.
    pub fn fit<S: AsRef<str>>(&self, sentences: &[S]) -> Result<TermMatrix> {
        if sentences.len() < 2 {
            return Err(Error::InsufficientData("fewer than two sentences"));
        }

        let counts: Vec<HashMap<String, usize>> = sentences
            .iter()
            .map(|s| {
                let mut counts = HashMap::new();
                for gram in self.ngrams(&tokenize(s.as_ref())) {
                    *counts.entry(gram).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut totals: HashMap<&str, (usize, usize)> = HashMap::new();
        for doc in &counts {
            for (term, &count) in doc {
                let entry = totals.entry(term.as_str()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if totals.is_empty() {
            return Err(Error::InsufficientData("empty vocabulary"));
        }

        let mut ranked: Vec<(&str, usize, usize)> = totals
            .into_iter()
            .map(|(term, (total, df))| (term, total, df))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n = sentences.len() as f64;
        let columns: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(col, (term, _, _))| (*term, col))
            .collect();
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(_, _, df)| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|doc| {
                let mut row: Vec<(usize, f64)> = doc
                    .iter()
                    .filter_map(|(term, &count)| {
                        columns
                            .get(term.as_str())
                            .map(|&col| (col, count as f64 * idf[col]))
                    })
                    .collect();
                row.sort_by_key(|&(col, _)| col);

                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        let terms = ranked.into_iter().map(|(term, _, _)| term.to_string()).collect();
        Ok(TermMatrix { terms, rows })
    }
}

/// Sparse sentence-by-term weight matrix produced by [`TermWeighter::fit`].
#[derive(Debug, Clone)]
pub struct TermMatrix {
    terms: Vec<String>,
    /// One sparse row per sentence: `(column, weight)` sorted by column.
    rows: Vec<Vec<(usize, f64)>>,
}

impl TermMatrix {
    /// Vocabulary in column order (ascending term order).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of sentences (rows).
    pub fn n_sentences(&self) -> usize {
        self.rows.len()
    }

    /// The sparse weight row of one sentence.
    pub fn row(&self, sentence: usize) -> &[(usize, f64)] {
        &self.rows[sentence]
    }

    /// Mean weight of each term across all sentences, in column order.
    pub fn mean_weights(&self) -> Vec<(&str, f64)> {
        let mut sums = vec![0.0; self.terms.len()];
        for row in &self.rows {
            for &(col, w) in row {
                sums[col] += w;
            }
        }
        let n = self.rows.len().max(1) as f64;
        self.terms
            .iter()
            .map(String::as_str)
            .zip(sums)
            .map(|(term, sum)| (term, sum / n))
            .collect()
    }

    /// Sum of each sentence's own normalized row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|(_, w)| w).sum())
            .collect()
    }
}
