//! Error types for sequence access.

use thiserror::Error;

/// Errors that can occur when accessing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Index is outside the valid range for the sequence.
    ///
    /// For a sequence of length `len`, valid scalar indices are
    /// `-len..=len - 1`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: isize,
        /// The length of the sequence.
        len: usize,
    },
}
