//! Candidate extraction from free-form text
//!
//! Raw input arrives with hyphens, spaces, `ISBN:` labels, and arbitrary
//! surrounding prose. Normalization runs in a fixed order: case-fold `x`
//! to `X`, drop every character that is not an ASCII digit or `X`, then
//! match the identifier shape against the cleaned text. Stripping comes
//! first because hyphenated forms like `0-306-40615-2` only match the
//! digit-run pattern once the hyphens are gone; label text is consumed
//! character-by-character by the same whitelist, so the pattern needs no
//! label branch of its own.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Identifier shape: a 13-character run starting 978/979, or 9 digits
    // followed by a digit-or-X check character, bounded on both sides.
    static ref CANDIDATE: Regex =
        Regex::new(r"\b((?:97[89])?[0-9]{9}[0-9X])\b").unwrap();
}

/// Extract an identifier-shaped candidate from raw text.
///
/// Returns the first candidate found after stripping, or `None` when the
/// cleaned text contains nothing identifier-shaped. The result is not yet
/// checksum-verified. Idempotent: feeding a returned candidate back in
/// yields the same candidate.
pub fn clean(raw: &str) -> Option<String> {
    let stripped = strip(raw);
    CANDIDATE
        .captures(&stripped)
        .map(|caps| caps[1].to_string())
}

/// Keep only ASCII digits and the check character, folding `x` to `X`.
fn strip(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            'x' | 'X' => Some('X'),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_labelled_hyphenated() {
        assert_eq!(clean("ISBN 0-306-40615-2"), Some("0306406152".to_string()));
        assert_eq!(clean("ISBN: 978-0-306-40615-7"), Some("9780306406157".to_string()));
    }

    #[test]
    fn test_clean_bare() {
        assert_eq!(clean("0306406152"), Some("0306406152".to_string()));
        assert_eq!(clean("9780306406157"), Some("9780306406157".to_string()));
    }

    #[test]
    fn test_clean_folds_check_character() {
        assert_eq!(clean("0-9752298-0-x"), Some("097522980X".to_string()));
    }

    #[test]
    fn test_clean_no_candidate() {
        assert_eq!(clean(""), None);
        assert_eq!(clean("no numbers here"), None);
        assert_eq!(clean("12345"), None);
    }

    #[test]
    fn test_clean_rejects_unbounded_digit_runs() {
        // A 13-character run without the 978/979 prefix has no boundary
        // after the first 10 characters, so nothing matches.
        assert_eq!(clean("1234567890123"), None);
    }

    #[test]
    fn test_clean_is_idempotent() {
        for raw in ["ISBN 0-306-40615-2", "978-0-306-40615-7", "junk", "0-9752298-0-x"] {
            if let Some(candidate) = clean(raw) {
                assert_eq!(clean(&candidate), Some(candidate.clone()));
            }
        }
    }
}
