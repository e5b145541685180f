//! Sentence segmentation.
//!
//! Boundaries are deliberately simple: one or more of `.`, `!`, `?`, or one
//! or more newlines. The boundary characters are dropped and each piece is
//! trimmed; whitespace-only pieces never reach the output.
//!
//! ```text
//! "AI is powerful. AI improves efficiency!\n\nEfficiency matters"
//!
//! 0: "AI is powerful"
//! 1: "AI improves efficiency"
//! 2: "Efficiency matters"
//! ```
//!
//! Abbreviations and decimals ("Dr.", "3.14") are split too. Lecture notes are
//! mostly short declarative lines, and the downstream weighting only needs a
//! stable notion of "document" per sentence, not linguistic accuracy.
//!
//! Every [`Sentence`] carries its position in the segmented sequence, so
//! ranking can restore document order by index instead of searching for the
//! text again.

use std::sync::OnceLock;

use regex::Regex;

static BOUNDARY: OnceLock<Regex> = OnceLock::new();
static TERMINATOR: OnceLock<Regex> = OnceLock::new();

fn boundary() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]+\s*|\n+").expect("sentence boundary regex"))
}

fn terminator() -> &'static Regex {
    TERMINATOR.get_or_init(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").expect("terminator regex"))
}

/// A trimmed sentence and its zero-based position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position in the segmented sequence.
    pub index: usize,
    /// The sentence text, trimmed, without its terminator.
    pub text: String,
}

impl Sentence {
    /// Create a new sentence.
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split text into sentences.
///
/// Empty input yields an empty vector.
///
/// ```rust
/// use notesum::split_sentences;
///
/// let sentences = split_sentences("One. Two!\nThree");
/// let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, ["One", "Two", "Three"]);
/// assert_eq!(sentences[2].index, 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    boundary()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, s)| Sentence::new(index, s))
        .collect()
}

/// Split text into sentences, returning only the texts.
pub fn sentence_texts(text: &str) -> Vec<String> {
    split_sentences(text).into_iter().map(|s| s.text).collect()
}

/// Split text after sentence terminators or line breaks, keeping the
/// punctuation.
///
/// Used when a paragraph is too large to chunk whole. A piece that does not
/// end in `.`, `!` or `?` ended at a line break (or the end of the text). Keeping the terminator
/// means the pieces can be re-joined and segmented again later without
/// fusing into a single sentence.
///
/// ```rust
/// use notesum::split_keeping_terminators;
///
/// let pieces = split_keeping_terminators("First one. Second?! Third");
/// assert_eq!(pieces, ["First one.", "Second?!", "Third"]);
/// ```
pub fn split_keeping_terminators(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in terminator().find_iter(text) {
        let piece = text[last..m.end()].trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        last = m.end();
    }

    let rest = text[last..].trim();
    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }

    pieces
}
