//! Check digit arithmetic for ISBN-10 and ISBN-13
//!
//! Both functions only look at the payload digits (the first 9 or 12), so
//! they accept either a complete ISBN or just its payload.

/// Compute the ISBN-10 check digit from the first nine digits
///
/// Returns a value in `0..=10`; 10 is written as `X`.
pub const fn isbn10_check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0usize;
    let mut i = 0;
    while i < 9 && i < digits.len() {
        sum += digits[i] as usize * (10 - i);
        i += 1;
    }
    ((11 - sum % 11) % 11) as u8
}

/// Compute the ISBN-13 check digit from the first twelve digits
///
/// Weights alternate 1, 3 starting with the first digit.
pub const fn isbn13_check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0usize;
    let mut i = 0;
    while i < 12 && i < digits.len() {
        let weight = if i % 2 == 0 { 1 } else { 3 };
        sum += digits[i] as usize * weight;
        i += 1;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Check that every digit is in `0..=9`, allowing `10` in the last place
/// when `allow_x` is set.
pub(crate) const fn validate_digits(digits: &[u8], allow_x: bool) -> bool {
    let mut i = 0;
    while i < digits.len() {
        let last = i + 1 == digits.len();
        if digits[i] > 10 || (digits[i] == 10 && !(last && allow_x)) {
            return false;
        }
        i += 1;
    }
    true
}
