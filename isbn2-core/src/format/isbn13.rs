//! 13-digit ISBN format

use core::fmt;
use core::str::FromStr;

use super::constants::BOOKLAND_PREFIX;
use super::{digit_string, Hyphenated, Isbn10};
use crate::ranges::BUILTIN_RANGES;
use crate::traits::RangeLookup;
use crate::validation::checksum::validate_digits;
use crate::validation::{isbn13_check_digit, Parser};
use crate::{IsbnError, IsbnResult};

/// 13-digit ISBN format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Isbn13 {
    digits: [u8; 13],
}

impl Isbn13 {
    /// Create a new ISBN-13 from its 13 digits, including the check digit
    ///
    /// ```
    /// use isbn2_core::Isbn13;
    ///
    /// let isbn13 = Isbn13::new([9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 0]).unwrap();
    /// assert_eq!(isbn13.to_string(), "9783161484100");
    /// ```
    ///
    /// # Errors
    /// `InvalidDigit` if a digit is out of range, `InvalidChecksum` if the
    /// check digit does not match.
    pub fn new(digits: [u8; 13]) -> IsbnResult<Self> {
        if !validate_digits(&digits, false) {
            return Err(IsbnError::InvalidDigit);
        }
        if isbn13_check_digit(&digits) != digits[12] {
            return Err(IsbnError::InvalidChecksum);
        }
        Ok(Isbn13 { digits })
    }

    /// All 13 digits
    pub const fn digits(&self) -> &[u8; 13] {
        &self.digits
    }

    /// The check digit
    pub const fn check_digit(&self) -> u8 {
        self.digits[12]
    }

    /// The GS1 prefix, e.g. `978`
    pub const fn prefix(&self) -> u16 {
        self.digits[0] as u16 * 100 + self.digits[1] as u16 * 10 + self.digits[2] as u16
    }

    /// Hyphenate using the built-in range tables
    ///
    /// The built-in tables only cover the registration groups of the
    /// bundled range message; see [`BuiltinRanges`](crate::BuiltinRanges)
    /// for how to use a complete one.
    ///
    /// ```
    /// use isbn2_core::Isbn13;
    ///
    /// let isbn13 = Isbn13::new([9, 7, 8, 1, 4, 9, 2, 0, 6, 7, 6, 6, 5]).unwrap();
    /// assert_eq!(isbn13.hyphenate().unwrap().as_str(), "978-1-4920-6766-5");
    /// ```
    pub fn hyphenate(&self) -> IsbnResult<Hyphenated> {
        BUILTIN_RANGES.hyphenate(self)
    }

    /// Name of the registration group, from the built-in range tables
    pub fn registration_group(&self) -> IsbnResult<&'static str> {
        BUILTIN_RANGES.registration_group(self)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digit_string(&self.digits))
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> IsbnResult<Self> {
        Parser::new(s)?.read_isbn13()
    }
}

impl From<Isbn10> for Isbn13 {
    fn from(isbn10: Isbn10) -> Self {
        let mut digits = [0u8; 13];
        digits[0] = (BOOKLAND_PREFIX / 100) as u8;
        digits[1] = (BOOKLAND_PREFIX / 10 % 10) as u8;
        digits[2] = (BOOKLAND_PREFIX % 10) as u8;
        digits[3..12].copy_from_slice(&isbn10.digits()[..9]);
        digits[12] = isbn13_check_digit(&digits);
        Isbn13 { digits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let digits = [9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 0];
        assert!(Isbn13::new(digits).is_ok());
        assert_eq!(
            Isbn13::new([9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 1]),
            Err(IsbnError::InvalidChecksum)
        );
        assert_eq!(
            Isbn13::new([9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 10]),
            Err(IsbnError::InvalidDigit)
        );
    }

    #[test]
    fn test_from_isbn10() {
        let isbn10 = Isbn10::new([0, 3, 0, 6, 4, 0, 6, 1, 5, 2]).unwrap();
        assert_eq!(
            Isbn13::from(isbn10),
            Isbn13::new([9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5, 7]).unwrap()
        );

        // X check digit is dropped and recomputed
        let isbn10 = Isbn10::new([0, 8, 0, 4, 4, 2, 9, 5, 7, 10]).unwrap();
        assert_eq!(Isbn13::from(isbn10).to_string(), "9780804429573");
    }

    #[test]
    fn test_prefix() {
        let isbn13 = Isbn13::new([9, 7, 9, 1, 0, 9, 0, 6, 3, 6, 0, 7, 1]).unwrap();
        assert_eq!(isbn13.prefix(), 979);
    }

    #[test]
    fn test_hyphenate() {
        let isbn13 = Isbn13::new([9, 7, 8, 3, 1, 6, 1, 4, 8, 4, 1, 0, 0]).unwrap();
        assert_eq!(isbn13.hyphenate().unwrap().as_str(), "978-3-16-148410-0");
        assert_eq!(isbn13.registration_group(), Ok("German language"));

        let isbn13 = Isbn13::new([9, 7, 9, 1, 0, 9, 0, 6, 3, 6, 0, 7, 1]).unwrap();
        assert_eq!(isbn13.hyphenate().unwrap().as_str(), "979-10-90636-07-1");
        assert_eq!(isbn13.registration_group(), Ok("France"));
    }
}
