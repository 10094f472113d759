//! Conversion between the two identifier lengths
//!
//! Converters assume a valid identifier of the opposite kind: the input
//! checksum is not re-verified, the output check character is always
//! recomputed. Wrong-length or non-digit input is a precondition
//! violation reported as an error, never coerced into identifier-shaped
//! output.

use crate::checksum;
use crate::error::{IsbnError, Result};

/// Convert a valid 10-character identifier to its 13-character form.
///
/// Prepends `978` to the 9 significant digits, drops the old check
/// character, and appends the recomputed ISBN-13 check digit.
pub fn to_isbn13(isbn10: &str) -> Result<String> {
    if isbn10.len() != 10 {
        return Err(IsbnError::WrongLength {
            expected: 10,
            actual: isbn10.len(),
        });
    }
    ensure_ascii(isbn10)?;

    let mut result = format!("978{}", &isbn10[..9]);
    let check = checksum::check_digit_13(&result)?;
    result.push(check);
    Ok(result)
}

/// Convert a valid 13-character identifier to its 10-character form.
///
/// Takes the 9 significant digits behind the 3-character prefix and
/// appends the recomputed ISBN-10 check character. The prefix itself is
/// dropped, so a `979`-prefixed input does not round-trip back to itself.
pub fn to_isbn10(isbn13: &str) -> Result<String> {
    if isbn13.len() != 13 {
        return Err(IsbnError::WrongLength {
            expected: 13,
            actual: isbn13.len(),
        });
    }
    ensure_ascii(isbn13)?;

    let mut result = isbn13[3..12].to_string();
    let check = checksum::check_char_10(&result)?;
    result.push(check);
    Ok(result)
}

/// Byte positions only line up with character positions for ASCII input;
/// anything else is rejected before slicing.
fn ensure_ascii(s: &str) -> Result<()> {
    match s.char_indices().find(|(_, c)| !c.is_ascii()) {
        Some((position, found)) => Err(IsbnError::InvalidCharacter { found, position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_isbn13() {
        assert_eq!(to_isbn13("0306406152"), Ok("9780306406157".to_string()));
    }

    #[test]
    fn test_to_isbn10() {
        assert_eq!(to_isbn10("9780306406157"), Ok("0306406152".to_string()));
    }

    #[test]
    fn test_to_isbn10_recomputes_check_character() {
        // The old check digit is dropped, not copied: the 10-character
        // check here is X even though the source ends in 8.
        assert_eq!(to_isbn10("9780975229804"), Ok("097522980X".to_string()));
    }

    #[test]
    fn test_input_checksum_is_not_reverified() {
        // Precondition holds by contract, not by re-validation: feeding an
        // invalid identifier of the right shape still converts.
        assert_eq!(to_isbn13("0306406151"), Ok("9780306406157".to_string()));
    }

    #[test]
    fn test_wrong_length_is_an_error() {
        assert_eq!(
            to_isbn13("030640615"),
            Err(IsbnError::WrongLength {
                expected: 10,
                actual: 9
            })
        );
        assert_eq!(
            to_isbn10("0306406152"),
            Err(IsbnError::WrongLength {
                expected: 13,
                actual: 10
            })
        );
    }

    #[test]
    fn test_non_digit_is_an_error() {
        assert_eq!(
            to_isbn10("9780306X06157"),
            Err(IsbnError::InvalidCharacter {
                found: 'X',
                position: 4
            })
        );
        // 10 bytes but 9 characters: caught by the ASCII guard, not a slice
        // panic.
        assert_eq!(
            to_isbn13("é30640615"),
            Err(IsbnError::InvalidCharacter {
                found: 'é',
                position: 0
            })
        );
    }
}
