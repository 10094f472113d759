//! Core types: the identifier kind and the validated `Isbn` newtype

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::{IsbnError, Result};
use crate::normalize;
use crate::validate;

/// Length-format of an ISBN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsbnKind {
    /// 10-character form; check character is a digit or `X`
    Ten,

    /// 13-character form with a `978`/`979` prefix; check digit is numeric
    Thirteen,
}

impl IsbnKind {
    /// Number of characters an identifier of this kind must have
    pub fn expected_len(self) -> usize {
        match self {
            IsbnKind::Ten => 10,
            IsbnKind::Thirteen => 13,
        }
    }

    /// Infer the kind from a candidate's length
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            10 => Some(IsbnKind::Ten),
            13 => Some(IsbnKind::Thirteen),
            _ => None,
        }
    }
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnKind::Ten => write!(f, "ISBN-10"),
            IsbnKind::Thirteen => write!(f, "ISBN-13"),
        }
    }
}

/// A normalized, checksum-verified ISBN.
///
/// Values are only constructed through [`parse`](crate::parse) or the
/// fallible string conversions ([`FromStr`], [`TryFrom<String>`], serde
/// deserialization), all of which normalize and validate first. An `Isbn`
/// therefore always satisfies the checksum relation for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Wrap an already-validated candidate. Callers guarantee the value is
    /// normalized and checksum-correct.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Isbn(value)
    }

    fn try_new(raw: &str) -> Result<Self> {
        let candidate = normalize::clean(raw).ok_or(IsbnError::NoCandidate)?;
        if validate::is_valid(&candidate, None) {
            Ok(Isbn(candidate))
        } else {
            Err(IsbnError::InvalidChecksum(candidate))
        }
    }

    /// The identifier's length-format
    pub fn kind(&self) -> IsbnKind {
        // Only 10- and 13-character values are ever stored.
        match self.0.len() {
            10 => IsbnKind::Ten,
            _ => IsbnKind::Thirteen,
        }
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert a 10-character identifier to its 13-character form.
    ///
    /// Calling this on a value that is already 13 characters long is a
    /// precondition violation, reported as [`IsbnError::WrongLength`].
    pub fn to_isbn13(&self) -> Result<Isbn> {
        convert::to_isbn13(&self.0).map(Isbn)
    }

    /// Convert a 13-character identifier to its 10-character form.
    ///
    /// The `979` prefix has no 10-character encoding, so converting a
    /// `979`-prefixed value produces an identifier that converts back to a
    /// `978`-prefixed one, not to the original. Calling this on a value
    /// that is already 10 characters long is a precondition violation.
    pub fn to_isbn10(&self) -> Result<Isbn> {
        convert::to_isbn10(&self.0).map(Isbn)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self> {
        Isbn::try_new(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self> {
        Isbn::try_new(&value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}
