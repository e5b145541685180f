//! Error types for notesum.

use std::path::PathBuf;

/// Errors that can occur while summarizing notes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer than two sentences, or no tokens to weight.
    ///
    /// Callers treat this as "nothing to extract from this chunk".
    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    /// The file could not be read or decoded with any supported encoding.
    #[error("unreadable file {}: {source}", path.display())]
    UnreadableFile {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Compression ratio requested against an empty original text.
    #[error("division by zero: original text is empty")]
    DivisionByZero,

    /// Chunk sizes are inconsistent.
    #[error(transparent)]
    InvalidChunkCapacity(#[from] crate::ChunkCapacityError),

    /// Language tag is not one of the supported locales.
    #[error("unknown language: {0} (expected 'ko' or 'en')")]
    UnknownLanguage(String),

    /// Summary type is not one of keywords, sentences, mixed.
    #[error("unknown summary type: {0} (expected 'keywords', 'sentences' or 'mixed')")]
    UnknownSummaryKind(String),

    /// Configuration could not be loaded or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Notes directory is missing or holds no matching files.
    #[error("no notes found under {}", .0.display())]
    NoNotes(PathBuf),

    /// Filesystem failure while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for notesum operations.
pub type Result<T> = std::result::Result<T, Error>;
