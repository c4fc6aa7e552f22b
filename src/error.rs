//! Error types for kmer-tally.

use thiserror::Error;

/// Result type alias for kmer-tally operations.
pub type Result<T> = std::result::Result<T, KmerError>;

/// Errors raised by validation, counting and formatting.
///
/// Every error is either a shape problem ([`ErrorKind::Type`]) or a value
/// problem ([`ErrorKind::Value`]); see [`KmerError::kind`]. Errors always
/// propagate unchanged to the caller, and only the CLI turns them into a
/// message and exit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KmerError {
    /// Input bytes are not valid UTF-8 text.
    #[error("sequence must be text: {0}")]
    NotText(std::str::Utf8Error),

    /// Sequence is empty (or whitespace-only).
    #[error("sequence must not be empty")]
    EmptySequence,

    /// Sequence contains characters outside {A, T, C, G} after uppercasing.
    /// `found` lists every offending character, deduplicated and sorted.
    #[error("sequence contains invalid nucleotides: {found}. Only A, T, C, G are allowed")]
    InvalidNucleotides { found: String },

    /// k was given as a boolean. Rejected even though it looks integer-like.
    #[error("k must be an integer, got a boolean: {0}")]
    BooleanK(bool),

    /// k is not an integer (non-numeric text or a fractional number).
    #[error("k must be an integer, got: {0}")]
    NonIntegerK(String),

    /// k is zero or negative.
    #[error("k must be greater than 0, got: {0}")]
    NonPositiveK(i64),

    /// k exceeds the sequence length.
    #[error("k ({k}) cannot be larger than the sequence length ({len})")]
    KTooLarge { k: usize, len: usize },

    /// Ordering policy is not one of appearance, frequency, kmer.
    #[error("sort order must be one of appearance, frequency, kmer; got: {0}")]
    UnknownSortOrder(String),
}

/// Coarse classification of a [`KmerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument shape (not text, k not an integer).
    Type,
    /// Correct shape, invalid value.
    Value,
}

impl KmerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KmerError::NotText(_) | KmerError::BooleanK(_) | KmerError::NonIntegerK(_) => {
                ErrorKind::Type
            }
            KmerError::EmptySequence
            | KmerError::InvalidNucleotides { .. }
            | KmerError::NonPositiveK(_)
            | KmerError::KTooLarge { .. }
            | KmerError::UnknownSortOrder(_) => ErrorKind::Value,
        }
    }
}
