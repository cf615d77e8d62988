//! 10-digit ISBN format

use core::fmt;
use core::str::FromStr;

use super::constants::BOOKLAND_PREFIX;
use super::{digit_string, Hyphenated, Isbn13};
use crate::ranges::BUILTIN_RANGES;
use crate::traits::RangeLookup;
use crate::validation::checksum::validate_digits;
use crate::validation::{isbn10_check_digit, Parser};
use crate::{IsbnError, IsbnResult};

/// 10-digit ISBN format
///
/// The last digit may be 10, which is written `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Isbn10 {
    digits: [u8; 10],
}

impl Isbn10 {
    /// Create a new ISBN-10 from its 10 digits, including the check digit
    ///
    /// ```
    /// use isbn2_core::Isbn10;
    ///
    /// let isbn10 = Isbn10::new([0, 3, 0, 6, 4, 0, 6, 1, 5, 2]).unwrap();
    /// assert_eq!(isbn10.to_string(), "0306406152");
    /// ```
    ///
    /// # Errors
    /// `InvalidDigit` if a digit is out of range, `InvalidChecksum` if the
    /// check digit does not match.
    pub fn new(digits: [u8; 10]) -> IsbnResult<Self> {
        if !validate_digits(&digits, true) {
            return Err(IsbnError::InvalidDigit);
        }
        if isbn10_check_digit(&digits) != digits[9] {
            return Err(IsbnError::InvalidChecksum);
        }
        Ok(Isbn10 { digits })
    }

    /// Build from a 978 ISBN-13 payload, recomputing the check digit
    pub(crate) fn from_payload(payload: &[u8]) -> Self {
        let mut digits = [0u8; 10];
        digits[..9].copy_from_slice(&payload[..9]);
        digits[9] = isbn10_check_digit(&digits);
        Isbn10 { digits }
    }

    /// All 10 digits
    pub const fn digits(&self) -> &[u8; 10] {
        &self.digits
    }

    /// The check digit, `10` meaning `X`
    pub const fn check_digit(&self) -> u8 {
        self.digits[9]
    }

    /// Hyphenate using the built-in range tables
    ///
    /// The built-in tables only cover the registration groups of the
    /// bundled range message; see [`BuiltinRanges`](crate::BuiltinRanges)
    /// for how to use a complete one.
    ///
    /// ```
    /// use isbn2_core::Isbn10;
    ///
    /// let isbn10 = Isbn10::new([8, 9, 6, 6, 2, 6, 1, 2, 6, 4]).unwrap();
    /// assert_eq!(isbn10.hyphenate().unwrap().as_str(), "89-6626-126-4");
    /// ```
    pub fn hyphenate(&self) -> IsbnResult<Hyphenated> {
        BUILTIN_RANGES.hyphenate(self)
    }

    /// Name of the registration group, from the built-in range tables
    pub fn registration_group(&self) -> IsbnResult<&'static str> {
        BUILTIN_RANGES.registration_group(self)
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digit_string(&self.digits))
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> IsbnResult<Self> {
        Parser::new(s)?.read_isbn10()
    }
}

impl TryFrom<Isbn13> for Isbn10 {
    type Error = IsbnError;

    /// Only ISBN-13s with the 978 prefix have an ISBN-10 form.
    fn try_from(isbn13: Isbn13) -> IsbnResult<Self> {
        if isbn13.prefix() != BOOKLAND_PREFIX {
            return Err(IsbnError::InvalidConversion);
        }
        Ok(Isbn10::from_payload(&isbn13.digits()[3..12]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert!(Isbn10::new([0, 3, 0, 6, 4, 0, 6, 1, 5, 2]).is_ok());
        assert!(Isbn10::new([0, 8, 0, 4, 4, 2, 9, 5, 7, 10]).is_ok());
        assert_eq!(
            Isbn10::new([0, 3, 0, 6, 4, 0, 6, 1, 5, 3]),
            Err(IsbnError::InvalidChecksum)
        );
        assert_eq!(
            Isbn10::new([0, 3, 0, 6, 4, 0, 12, 1, 5, 2]),
            Err(IsbnError::InvalidDigit)
        );
    }

    #[test]
    fn test_display() {
        let isbn = Isbn10::new([0, 8, 0, 4, 4, 2, 9, 5, 7, 10]).unwrap();
        assert_eq!(isbn.to_string(), "080442957X");
        assert_eq!(isbn.check_digit(), 10);
    }

    #[test]
    fn test_try_from_isbn13() {
        let isbn13 = Isbn13::new([9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5, 7]).unwrap();
        assert_eq!(
            Isbn10::try_from(isbn13),
            Ok(Isbn10::new([0, 3, 0, 6, 4, 0, 6, 1, 5, 2]).unwrap())
        );

        let isbn13 = Isbn13::new([9, 7, 9, 1, 0, 9, 0, 6, 3, 6, 0, 7, 1]).unwrap();
        assert_eq!(Isbn10::try_from(isbn13), Err(IsbnError::InvalidConversion));
    }

    #[test]
    fn test_hyphenate() {
        let isbn = Isbn10::new([0, 9, 7, 5, 2, 2, 9, 8, 0, 10]).unwrap();
        assert_eq!(isbn.hyphenate().unwrap().as_str(), "0-9752298-0-X");
        assert_eq!(isbn.registration_group(), Ok("English language"));
    }
}
