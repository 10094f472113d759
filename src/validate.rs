//! Checksum validation

use crate::checksum;
use crate::types::IsbnKind;

/// Check whether a candidate is a checksum-valid identifier.
///
/// When `kind` is given, the candidate must have exactly that kind's
/// length; otherwise the kind is inferred from the length. The supplied
/// check character must equal the recomputed one exactly, so a lowercase
/// `x` never validates. Anything malformed — wrong length, non-ASCII
/// input, stray characters among the digits — is simply `false`; this
/// function never panics.
pub fn is_valid(candidate: &str, kind: Option<IsbnKind>) -> bool {
    if !candidate.is_ascii() {
        return false;
    }

    let kind = match kind {
        Some(kind) if candidate.len() == kind.expected_len() => kind,
        Some(_) => return false,
        None => match IsbnKind::from_len(candidate.len()) {
            Some(kind) => kind,
            None => return false,
        },
    };

    let supplied = candidate.as_bytes()[candidate.len() - 1] as char;
    let significant = &candidate[..candidate.len() - 1];

    let expected = match kind {
        IsbnKind::Ten => checksum::check_char_10(significant),
        IsbnKind::Thirteen => checksum::check_digit_13(significant),
    };

    expected.map(|c| c == supplied).unwrap_or(false)
}

/// Check a candidate against the 10-character form specifically.
pub fn is_valid_isbn10(candidate: &str) -> bool {
    is_valid(candidate, Some(IsbnKind::Ten))
}

/// Check a candidate against the 13-character form specifically.
pub fn is_valid_isbn13(candidate: &str) -> bool {
    is_valid(candidate, Some(IsbnKind::Thirteen))
}
