//! Isbnkit
//!
//! This crate recognizes, validates, normalizes, and converts ISBN-10 and
//! ISBN-13 identifiers embedded in free-form text. Raw input is reduced to
//! an identifier-shaped candidate, the candidate is checksum-verified, and
//! a verified identifier can be converted between the two length-formats
//! via the fixed `978` prefix transform.
//!
//! Every operation is a pure, synchronous function over immutable input;
//! the crate holds no state beyond a lazily compiled extraction pattern
//! and is freely usable from multiple threads.

pub mod checksum;
pub mod convert;
pub mod error;
pub mod normalize;
pub mod types;
pub mod validate;

pub use convert::{to_isbn10, to_isbn13};
pub use error::{IsbnError, Result};
pub use normalize::clean;
pub use types::{Isbn, IsbnKind};
pub use validate::{is_valid, is_valid_isbn10, is_valid_isbn13};

/// Extract and validate an identifier from raw text in one step.
///
/// Returns `Some` only when normalization finds a candidate and its
/// checksum holds. Pass a kind to additionally require that length-format;
/// with `None` the kind is inferred from the candidate's length.
pub fn parse(raw: &str, kind: Option<IsbnKind>) -> Option<Isbn> {
    let Some(candidate) = normalize::clean(raw) else {
        tracing::debug!("No identifier candidate found in input");
        return None;
    };

    if validate::is_valid(&candidate, kind) {
        Some(Isbn::new_unchecked(candidate))
    } else {
        tracing::debug!("Candidate {} failed validation", candidate);
        None
    }
}
