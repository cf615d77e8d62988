//! Text parsing for ISBN strings
//!
//! Hyphens and spaces are accepted anywhere as separators. `X` (or `x`)
//! stands for the value 10 and is only valid as the check digit of an
//! ISBN-10; that placement is enforced when the digits are turned into an
//! [`Isbn10`] or [`Isbn13`].

use arrayvec::ArrayVec;

use crate::{Isbn, Isbn10, Isbn13, IsbnError, IsbnResult};

/// Digit buffer collected from an ISBN string
#[derive(Debug, Clone)]
pub(crate) struct Parser {
    digits: ArrayVec<u8, 13>,
}

impl Parser {
    pub(crate) fn new(s: &str) -> IsbnResult<Self> {
        let mut digits = ArrayVec::new();
        for c in s.chars() {
            let digit = match c {
                '-' | ' ' => continue,
                'X' | 'x' => 10,
                _ => c.to_digit(10).ok_or(IsbnError::InvalidDigit)? as u8,
            };
            digits
                .try_push(digit)
                .map_err(|_| IsbnError::InvalidLength)?;
        }
        Ok(Parser { digits })
    }

    pub(crate) fn read_isbn(&self) -> IsbnResult<Isbn> {
        match self.digits.len() {
            10 => self.read_isbn10().map(Isbn::_10),
            13 => self.read_isbn13().map(Isbn::_13),
            _ => Err(IsbnError::InvalidLength),
        }
    }

    pub(crate) fn read_isbn10(&self) -> IsbnResult<Isbn10> {
        let digits: [u8; 10] = self
            .digits
            .as_slice()
            .try_into()
            .map_err(|_| IsbnError::InvalidLength)?;
        Isbn10::new(digits)
    }

    pub(crate) fn read_isbn13(&self) -> IsbnResult<Isbn13> {
        let digits: [u8; 13] = self
            .digits
            .as_slice()
            .try_into()
            .map_err(|_| IsbnError::InvalidLength)?;
        Isbn13::new(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_from_str_isbn10() {
        // Check digit calculation example
        assert!(Isbn::from_str("0-306-40615-2").is_ok());
        assert_eq!(
            Isbn::from_str("99999-999-9-X"),
            Err(IsbnError::InvalidChecksum)
        );

        // Registrant element examples
        assert!(Isbn::from_str("99921-58-10-7").is_ok());
        assert!(Isbn::from_str("9971-5-0210-0").is_ok());
        assert!(Isbn::from_str("960-425-059-0").is_ok());
        assert!(Isbn::from_str("80-902734-1-6").is_ok());
        assert!(Isbn::from_str("85-359-0277-5").is_ok());
        assert!(Isbn::from_str("1-84356-028-3").is_ok());
        assert!(Isbn::from_str("0-684-84328-5").is_ok());
        assert!(Isbn::from_str("0-8044-2957-X").is_ok());
        assert!(Isbn::from_str("0-85131-041-9").is_ok());
        assert!(Isbn::from_str("0-943396-04-2").is_ok());
        assert!(Isbn::from_str("0-9752298-0-X").is_ok());
    }

    #[test]
    fn test_from_str_isbn13() {
        assert!(Isbn13::from_str("978-3-16-148410-0").is_ok());
        assert!(Isbn13::from_str("978-0-306-40615-7").is_ok());
        assert!(Isbn13::from_str("978 0 306 40615 7").is_ok());
        assert_eq!(
            Isbn13::from_str("978-0-306-40615-8"),
            Err(IsbnError::InvalidChecksum)
        );
    }

    #[test]
    fn test_lowercase_x() {
        assert_eq!(
            Isbn10::from_str("0-8044-2957-x"),
            Isbn10::from_str("0-8044-2957-X")
        );
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(Isbn::from_str(""), Err(IsbnError::InvalidLength));
        let short = Isbn::from_str("0-306-40615");
        assert_eq!(short, Err(IsbnError::InvalidLength));
        assert_eq!(
            Isbn::from_str("978-0-306-40615-7-1"),
            Err(IsbnError::InvalidLength)
        );
        // Valid ISBN-13 text is not an ISBN-10
        assert_eq!(
            Isbn10::from_str("978-0-306-40615-7"),
            Err(IsbnError::InvalidLength)
        );
        assert_eq!(
            Isbn13::from_str("0-306-40615-2"),
            Err(IsbnError::InvalidLength)
        );
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            Isbn::from_str("0-306-4O615-2"),
            Err(IsbnError::InvalidDigit)
        );
        assert_eq!(
            Isbn::from_str("0_306_40615_2"),
            Err(IsbnError::InvalidDigit)
        );
        // X is only allowed as an ISBN-10 check digit
        assert_eq!(
            Isbn::from_str("X-306-40615-2"),
            Err(IsbnError::InvalidDigit)
        );
        assert_eq!(
            Isbn::from_str("978-0-306-40615-X"),
            Err(IsbnError::InvalidDigit)
        );
    }
}
