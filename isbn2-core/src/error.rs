//! Error types for ISBN operations

/// Errors that can occur while building, parsing or hyphenating an ISBN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnError {
    /// The input does not hold 10 or 13 digits
    InvalidLength,
    /// A character or digit is not allowed at its position
    InvalidDigit,
    /// The check digit does not match the other digits
    InvalidChecksum,
    /// The ISBN-13 does not carry the 978 prefix and has no ISBN-10 form
    InvalidConversion,
    /// No prefix, registration group or rule covers the number
    InvalidGroup,
    /// The matching range is not in use
    UndefinedRange,
}

impl core::fmt::Display for IsbnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            IsbnError::InvalidLength => "Invalid ISBN length",
            IsbnError::InvalidDigit => "Invalid ISBN digit",
            IsbnError::InvalidChecksum => "Invalid ISBN check digit",
            IsbnError::InvalidConversion => "ISBN-13 has no ISBN-10 equivalent",
            IsbnError::InvalidGroup => "ISBN is not part of a known registration group",
            IsbnError::UndefinedRange => "ISBN falls in an undefined range",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for IsbnError {}

/// Result type for ISBN operations
pub type IsbnResult<T> = core::result::Result<T, IsbnError>;
