//! Domain error types

use thiserror::Error;

/// Domain-level errors raised by structured pair edits.
///
/// Normalization and bulk-text parsing never produce these; only edits
/// addressing a pair that is not in the collection do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No pair with the given id exists in the collection.
    #[error("pair not found: {0}")]
    PairNotFound(String),

    /// A reorder target lies past the end of the collection.
    #[error("index {index} out of range for collection of {len} pairs")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length.
        len: usize,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
