//! Supported languages and their stopword sets.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A supported note language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Korean (`ko`).
    #[default]
    #[serde(rename = "ko")]
    Korean,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// The short language tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// The fixed stopword list for this language.
    pub const fn stopwords(self) -> &'static [&'static str] {
        match self {
            Self::Korean => KOREAN,
            Self::English => ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Korean),
            "en" => Ok(Self::English),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

const KOREAN: &[&str] = &[
    "이", "그", "저", "것", "수", "있", "하", "되", "되다", "있다", "하다", "의", "가", "을", "를",
    "에", "에서", "로", "으로", "와", "과", "도", "는", "은", "이다", "다",
];

const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those", "i", "you", "he",
    "she", "it", "we", "they",
];

/// Exact-match stopword lookup for one language.
///
/// Terms are expected to be lowercased already; no case folding happens here.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    language: Language,
    words: HashSet<&'static str>,
}

impl StopwordFilter {
    /// Build the filter for `language`.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            words: language.stopwords().iter().copied().collect(),
        }
    }

    /// The language this filter was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether `term` is a stopword.
    pub fn is_stopword(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
