//! Paragraph-first chunking with a sentence fallback.
//!
//! ## The Algorithm
//!
//! Given a [`ChunkCapacity`] of `min..=max` characters:
//!
//! ```text
//! 1. Text no longer than max? Return it as the only chunk.
//! 2. Split on blank lines ("\n\n") into paragraphs.
//! 3. For each paragraph:
//!    - If it is longer than max, or it would overflow a buffer that has
//!      not reached min yet, feed it sentence by sentence.
//!    - Otherwise append it whole.
//! 4. Appending a unit that would overflow a non-empty buffer flushes the
//!    buffer first.
//! ```
//!
//! The sentence fallback also breaks at single line breaks, so bullet lists
//! without punctuation still split. Paragraphs are joined with a blank line,
//! sentences with a space and lines with a line break. Every chunk stays
//! within `max` except one whose only content is a single sentence longer
//! than `max`; that sentence cannot be split further and passes through
//! whole.

use crate::segment::split_keeping_terminators;
use crate::{ChunkCapacity, Chunker, Slab};

const PARAGRAPH_SEP: &str = "\n\n";
const SENTENCE_SEP: &str = " ";
const LINE_SEP: &str = "\n";

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Paragraph-first chunker for long notes.
///
/// ## Example
///
/// ```rust
/// use notesum::{ChunkCapacity, Chunker, ParagraphChunker};
///
/// let chunker = ParagraphChunker::new(ChunkCapacity::from(20..=40));
/// let text = "Paragraph one is here.\n\nParagraph two is here.\n\nThree.";
/// let slabs = chunker.chunk(text);
///
/// assert_eq!(slabs.len(), 2);
/// assert!(slabs.iter().all(|s| s.char_len() <= 40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParagraphChunker {
    capacity: ChunkCapacity,
}

#[derive(Default)]
struct Buffer {
    text: String,
    chars: usize,
}

impl ParagraphChunker {
    /// Create a chunker with the given capacity.
    #[must_use]
    pub fn new(capacity: ChunkCapacity) -> Self {
        Self { capacity }
    }

    /// The configured capacity.
    pub fn capacity(&self) -> ChunkCapacity {
        self.capacity
    }

    /// Whether `text` is long enough to need chunking.
    pub fn should_chunk(&self, text: &str) -> bool {
        char_len(text) > self.capacity.max()
    }

    fn push(&self, buffer: &mut Buffer, chunks: &mut Vec<String>, unit: &str, sep: &str) {
        let unit_chars = char_len(unit);
        if !buffer.text.is_empty()
            && self
                .capacity
                .would_overflow(buffer.chars, sep.len() + unit_chars)
        {
            Self::flush(buffer, chunks);
        }

        if !buffer.text.is_empty() {
            buffer.text.push_str(sep);
            buffer.chars += sep.len();
        }
        buffer.text.push_str(unit);
        buffer.chars += unit_chars;
    }

    fn flush(buffer: &mut Buffer, chunks: &mut Vec<String>) {
        let text = std::mem::take(&mut buffer.text);
        buffer.chars = 0;
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
    }

    /// Split `text` into chunk strings.
    pub fn split(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }
        if !self.should_chunk(text) {
            return vec![trimmed.to_string()];
        }

        let mut chunks = Vec::new();
        let mut buffer = Buffer::default();

        for paragraph in text.split(PARAGRAPH_SEP).map(str::trim) {
            if paragraph.is_empty() {
                continue;
            }

            let len = char_len(paragraph);
            let overflows = self
                .capacity
                .would_overflow(buffer.chars, PARAGRAPH_SEP.len() + len);
            let below_min = buffer.chars < self.capacity.min();

            if len > self.capacity.max() || (overflows && below_min && !buffer.text.is_empty()) {
                let mut previous: Option<&str> = None;
                for sentence in &split_keeping_terminators(paragraph) {
                    let sep = match previous {
                        None => PARAGRAPH_SEP,
                        Some(p) if p.ends_with(['.', '!', '?']) => SENTENCE_SEP,
                        Some(_) => LINE_SEP,
                    };
                    self.push(&mut buffer, &mut chunks, sentence, sep);
                    previous = Some(sentence.as_str());
                }
            } else {
                self.push(&mut buffer, &mut chunks, paragraph, PARAGRAPH_SEP);
            }
        }

        Self::flush(&mut buffer, &mut chunks);
        chunks
    }
}

impl Chunker for ParagraphChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        self.split(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Slab::new(text, index))
            .collect()
    }
}
