//! Randomized checks of check digits and ISBN-10 / ISBN-13 conversion

use std::str::FromStr;

use isbn2::{isbn10_check_digit, isbn13_check_digit, Isbn, Isbn10, Isbn13, IsbnError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn random_isbn10(rng: &mut StdRng) -> Isbn10 {
    let mut digits = [0u8; 10];
    for d in digits.iter_mut().take(9) {
        *d = rng.gen_range(0..10);
    }
    digits[9] = isbn10_check_digit(&digits);
    Isbn10::new(digits).unwrap()
}

fn random_isbn13(rng: &mut StdRng) -> Isbn13 {
    let mut digits = [0u8; 13];
    let prefix = if rng.gen_bool(0.5) { 978 } else { 979 };
    digits[..3].copy_from_slice(&[9, 7, (prefix % 10) as u8]);
    for d in digits[3..12].iter_mut() {
        *d = rng.gen_range(0..10);
    }
    digits[12] = isbn13_check_digit(&digits);
    Isbn13::new(digits).unwrap()
}

#[test]
fn isbn10_survives_conversion_to_isbn13_and_back() {
    let mut rng = StdRng::seed_from_u64(0x1581);
    for _ in 0..SAMPLES {
        let isbn10 = random_isbn10(&mut rng);
        let isbn13 = Isbn13::from(isbn10);
        assert_eq!(isbn13.prefix(), 978);
        assert_eq!(&isbn13.digits()[3..12], &isbn10.digits()[..9]);
        assert_eq!(Isbn10::try_from(isbn13), Ok(isbn10));
    }
}

#[test]
fn only_978_isbn13_converts_to_isbn10() {
    let mut rng = StdRng::seed_from_u64(0x1313);
    for _ in 0..SAMPLES {
        let isbn13 = random_isbn13(&mut rng);
        let converted = Isbn10::try_from(isbn13);
        if isbn13.prefix() == 978 {
            assert!(converted.is_ok());
        } else {
            assert_eq!(converted, Err(IsbnError::InvalidConversion));
        }
    }
}

#[test]
fn single_digit_errors_are_detected() {
    let mut rng = StdRng::seed_from_u64(0xbad);
    for _ in 0..SAMPLES {
        let isbn10 = random_isbn10(&mut rng);
        let mut digits = *isbn10.digits();
        let position = rng.gen_range(0..9);
        digits[position] = (digits[position] + rng.gen_range(1..10)) % 10;
        assert_eq!(Isbn10::new(digits), Err(IsbnError::InvalidChecksum));

        let isbn13 = random_isbn13(&mut rng);
        let mut digits = *isbn13.digits();
        let position = rng.gen_range(0..12);
        digits[position] = (digits[position] + rng.gen_range(1..10)) % 10;
        assert_eq!(Isbn13::new(digits), Err(IsbnError::InvalidChecksum));
    }
}

#[test]
fn display_parses_back() {
    let mut rng = StdRng::seed_from_u64(0x7e57);
    for _ in 0..SAMPLES {
        let isbn = Isbn::from(random_isbn10(&mut rng));
        assert_eq!(Isbn::from_str(&isbn.to_string()), Ok(isbn));

        let isbn = Isbn::from(random_isbn13(&mut rng));
        assert_eq!(Isbn::from_str(&isbn.to_string()), Ok(isbn));
    }
}

#[test]
fn hyphenated_text_parses_back() {
    let mut rng = StdRng::seed_from_u64(0x2d2d);
    for _ in 0..SAMPLES {
        let isbn = Isbn::from(random_isbn13(&mut rng));
        // Not every random number belongs to a known group
        if let Ok(hyphenated) = isbn.hyphenate() {
            assert_eq!(hyphenated.matches('-').count(), 4);
            assert_eq!(Isbn::from_str(&hyphenated), Ok(isbn));
        }
    }
}
