//! Error types for isbnkit

use thiserror::Error;

/// Result type alias using IsbnError
pub type Result<T> = std::result::Result<T, IsbnError>;

/// Errors reported by the fallible entry points.
///
/// The query surface (`clean`, `is_valid`, `parse`) never returns these;
/// invalid input there is signalled by `None`/`false`. `IsbnError` is
/// reserved for the fallible constructors and for precondition violations
/// on the checksum and conversion routines, which expect already-validated
/// input of the right shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsbnError {
    #[error("no identifier-shaped substring found in input")]
    NoCandidate,

    #[error("candidate {0:?} failed its checksum")]
    InvalidChecksum(String),

    #[error("expected {expected} characters, found {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { found: char, position: usize },
}
