//! The Slab type: one chunk of a long note.

/// A chunk of note text, summarized independently of its neighbours.
///
/// Chunk text is re-joined from paragraphs and sentences, so it is not a
/// verbatim span of the source: separators are normalized to a blank line
/// between paragraphs and a single space between sentences.
///
/// ```rust
/// use notesum::Slab;
///
/// let slab = Slab::new("첫 문단.\n\n둘째 문단.", 0);
/// assert_eq!(slab.char_len(), 13);
/// assert!(slab.len() > slab.char_len()); // bytes vs characters
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The length of this chunk in characters, the unit chunk sizes use.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, chars: {} }}",
            self.index,
            self.char_len()
        )
    }
}
