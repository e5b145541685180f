//! Chunk capacity configuration.
//!
//! ## Min vs Max
//!
//! Chunking a long lecture note is a balance between two failure modes:
//!
//! - Chunks too small: too few sentences for TF-IDF to say anything.
//! - Chunks too large: one chunk's vocabulary drowns out local topics.
//!
//! `ChunkCapacity` expresses this as two numbers, both in characters:
//!
//! - `min`: a chunk below this size keeps absorbing text, even if that means
//!   breaking the next paragraph into sentences to make it fit.
//! - `max`: the ceiling. A chunk is flushed before it would grow past it.
//!   The only chunk allowed to exceed it is a single sentence that is
//!   larger than `max` on its own.
//!
//! ```text
//! min = 6000, max = 8000
//!
//! buffer 5200 + paragraph 1500 = 6700   -> append
//! buffer 6700 + paragraph 2500 = 9200   -> flush 6700, start new buffer
//! buffer 3000 + paragraph 5500 = 8500   -> below min: feed paragraph by sentence
//! ```

/// Configuration for chunk size with a flush threshold and a hard limit.
///
/// # Examples
///
/// ```rust
/// use notesum::ChunkCapacity;
///
/// // Fixed size: min == max
/// let cap = ChunkCapacity::new(512);
/// assert_eq!(cap.min(), 512);
/// assert_eq!(cap.max(), 512);
///
/// // Accumulate to 6000, never exceed 8000
/// let cap = ChunkCapacity::new(8000).with_min(6000).unwrap();
/// assert_eq!(cap.min(), 6000);
///
/// // Range syntax
/// let cap = ChunkCapacity::from(400..=600);
/// assert_eq!(cap.min(), 400);
/// assert_eq!(cap.max(), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkCapacity {
    min: usize,
    max: usize,
}

impl ChunkCapacity {
    /// Create a capacity with the same min and max size.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { min: max, max }
    }

    /// A capacity whose min is three quarters of `max`.
    #[must_use]
    pub const fn for_max(max: usize) -> Self {
        Self {
            min: max / 4 * 3 + (max % 4) * 3 / 4,
            max,
        }
    }

    /// The size a chunk must reach before it may be flushed early.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The maximum allowed chunk size.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Set the flush threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max` or `max == 0`.
    pub fn with_min(self, min: usize) -> Result<Self, ChunkCapacityError> {
        if self.max == 0 {
            Err(ChunkCapacityError::ZeroMax)
        } else if min > self.max {
            Err(ChunkCapacityError::MinGreaterThanMax { min, max: self.max })
        } else {
            Ok(Self { min, ..self })
        }
    }

    /// Check if adding `additional` characters would exceed the capacity.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max
    }
}

impl Default for ChunkCapacity {
    fn default() -> Self {
        Self {
            min: 6000,
            max: 8000,
        }
    }
}

impl From<usize> for ChunkCapacity {
    fn from(size: usize) -> Self {
        Self::new(size)
    }
}

impl From<std::ops::RangeInclusive<usize>> for ChunkCapacity {
    fn from(range: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end().max(range.start()),
        }
    }
}

/// Error when configuring chunk capacity.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChunkCapacityError {
    /// Min size must be <= max size.
    #[error("min chunk size ({min}) must be <= max chunk size ({max})")]
    MinGreaterThanMax {
        /// The requested min.
        min: usize,
        /// The max it exceeded.
        max: usize,
    },

    /// Max size must be > 0.
    #[error("max chunk size must be > 0")]
    ZeroMax,
}
