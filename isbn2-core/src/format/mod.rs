//! ISBN value types
//!
//! This module defines the validated ISBN-10 and ISBN-13 types, the
//! [`Isbn`] sum type over both and the borrowed [`IsbnRef`] view that range
//! sources operate on.

pub mod constants;
pub mod isbn;
pub mod isbn10;
pub mod isbn13;
#[cfg(feature = "serialize")]
mod serialize;

pub use isbn::{Isbn, IsbnRef};
pub use isbn10::Isbn10;
pub use isbn13::Isbn13;

use arrayvec::ArrayString;

/// Hyphenated ISBN text: 13 digits and 4 hyphens at most
pub type Hyphenated = ArrayString<{ constants::HYPHENATED_CAPACITY }>;

/// Render a digit value, using `X` for 10
pub(crate) const fn digit_char(digit: u8) -> char {
    match digit {
        10 => 'X',
        d => (b'0' + d) as char,
    }
}

/// Bare digit string of an ISBN
pub(crate) fn digit_string(digits: &[u8]) -> ArrayString<13> {
    let mut s = ArrayString::new();
    for &d in digits.iter().take(13) {
        s.push(digit_char(d));
    }
    s
}
