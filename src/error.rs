//! Error types.

use thiserror::Error;

/// Reasons a city-index sequence is not a valid tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The sequence does not visit every city exactly once.
    #[error("tour has {actual} entries but there are {expected} cities")]
    LengthMismatch { expected: usize, actual: usize },

    /// An entry refers to a city that does not exist.
    #[error("city index {index} is out of range for {len} cities")]
    IndexOutOfRange { index: usize, len: usize },

    /// A city appears more than once.
    #[error("city index {index} appears more than once")]
    DuplicateIndex { index: usize },
}

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum AnnealError {
    /// A tour handed to the evaluator is not a permutation of the city indices.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] TourError),

    /// A configuration value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A city record could not be parsed.
    #[error("malformed city data at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnnealError>;
