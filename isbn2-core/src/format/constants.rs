//! Format constants for ISBN-10 and ISBN-13

/// GS1 prefix shared by every ISBN-10
pub const BOOKLAND_PREFIX: u16 = 978;

/// Digits of the GS1 prefix
pub const PREFIX_DIGITS: usize = 3;

/// Digits between the GS1 prefix and the check digit
pub const BODY_DIGITS: usize = 9;

/// Width of a rule segment in the range message
pub const SEGMENT_DIGITS: usize = 7;

/// Longest hyphenated form: `978-1-4920-6766-5`
pub const HYPHENATED_CAPACITY: usize = 17;
