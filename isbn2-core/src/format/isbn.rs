//! ISBN sum type and borrowed view

use core::fmt;
use core::str::FromStr;

use super::constants::{BODY_DIGITS, BOOKLAND_PREFIX};
use super::{Hyphenated, Isbn10, Isbn13};
use crate::validation::Parser;
use crate::{IsbnError, IsbnResult};

/// An International Standard Book Number, either ISBN-10 or ISBN-13.
///
/// ```
/// use isbn2_core::{Isbn, Isbn10, Isbn13};
///
/// let isbn_10 = Isbn::_10(Isbn10::new([0, 3, 4, 0, 0, 1, 3, 8, 1, 8]).unwrap());
/// let isbn_13 = Isbn::_13(Isbn13::new([9, 7, 8, 0, 3, 4, 0, 0, 1, 3, 8, 1, 6]).unwrap());
///
/// assert_eq!("0-340-01381-8".parse(), Ok(isbn_10));
/// assert_eq!("978-0-340-01381-6".parse(), Ok(isbn_13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isbn {
    _10(Isbn10),
    _13(Isbn13),
}

impl Isbn {
    /// Hyphenate using the built-in range tables
    pub fn hyphenate(&self) -> IsbnResult<Hyphenated> {
        match self {
            Isbn::_10(c) => c.hyphenate(),
            Isbn::_13(c) => c.hyphenate(),
        }
    }

    /// Name of the registration group, from the built-in range tables
    pub fn registration_group(&self) -> IsbnResult<&'static str> {
        match self {
            Isbn::_10(c) => c.registration_group(),
            Isbn::_13(c) => c.registration_group(),
        }
    }

    /// The ISBN-13 form; ISBN-10s are converted
    pub fn to_isbn13(&self) -> Isbn13 {
        match *self {
            Isbn::_10(c) => Isbn13::from(c),
            Isbn::_13(c) => c,
        }
    }

    pub const fn is_isbn10(&self) -> bool {
        matches!(self, Isbn::_10(_))
    }

    pub const fn is_isbn13(&self) -> bool {
        matches!(self, Isbn::_13(_))
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Isbn::_10(c) => fmt::Display::fmt(c, f),
            Isbn::_13(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Isbn10> for Isbn {
    fn from(isbn10: Isbn10) -> Isbn {
        Isbn::_10(isbn10)
    }
}

impl From<Isbn13> for Isbn {
    fn from(isbn13: Isbn13) -> Isbn {
        Isbn::_13(isbn13)
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Isbn, IsbnError> {
        Parser::new(s)?.read_isbn()
    }
}

/// Borrowed view of either ISBN format
///
/// Range sources take anything convertible into an `IsbnRef`, so the same
/// lookup serves `&Isbn10`, `&Isbn13` and `&Isbn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnRef<'a> {
    _10(&'a Isbn10),
    _13(&'a Isbn13),
}

impl<'a> IsbnRef<'a> {
    /// GS1 prefix; ISBN-10s belong to 978
    pub fn prefix(&self) -> u16 {
        match self {
            IsbnRef::_10(_) => BOOKLAND_PREFIX,
            IsbnRef::_13(c) => c.prefix(),
        }
    }

    /// The nine digits between the GS1 prefix and the check digit
    pub fn body(&self) -> &'a [u8] {
        match *self {
            IsbnRef::_10(c) => &c.digits()[..BODY_DIGITS],
            IsbnRef::_13(c) => &c.digits()[3..3 + BODY_DIGITS],
        }
    }

    pub fn check_digit(&self) -> u8 {
        match self {
            IsbnRef::_10(c) => c.check_digit(),
            IsbnRef::_13(c) => c.check_digit(),
        }
    }

    /// Whether the hyphenated form starts with the GS1 prefix
    pub fn has_prefix(&self) -> bool {
        matches!(self, IsbnRef::_13(_))
    }
}

impl<'a> From<&'a Isbn10> for IsbnRef<'a> {
    fn from(isbn: &'a Isbn10) -> Self {
        IsbnRef::_10(isbn)
    }
}

impl<'a> From<&'a Isbn13> for IsbnRef<'a> {
    fn from(isbn: &'a Isbn13) -> Self {
        IsbnRef::_13(isbn)
    }
}

impl<'a> From<&'a Isbn> for IsbnRef<'a> {
    fn from(isbn: &'a Isbn) -> Self {
        match isbn {
            Isbn::_10(c) => IsbnRef::_10(c),
            Isbn::_13(c) => IsbnRef::_13(c),
        }
    }
}
