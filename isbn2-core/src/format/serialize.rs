//! Serde support, enabled by the `serialize` feature
//!
//! ISBNs serialize as their bare digit string and deserialize through
//! `FromStr`, so a deserialized value always has a valid check digit.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use super::digit_string;
use crate::{Isbn, Isbn10, Isbn13};

impl Serialize for Isbn10 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&digit_string(self.digits()))
    }
}

impl Serialize for Isbn13 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&digit_string(self.digits()))
    }
}

impl Serialize for Isbn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Isbn::_10(c) => c.serialize(serializer),
            Isbn::_13(c) => c.serialize(serializer),
        }
    }
}

/// Visitor parsing any ISBN type from a string
struct IsbnVisitor<T>(PhantomData<T>);

impl<T> Visitor<'_> for IsbnVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISBN string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::from_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Isbn10 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IsbnVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Isbn13 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IsbnVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IsbnVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Isbn, Isbn10, Isbn13};

    #[test]
    fn test_serialize_as_digits() {
        let isbn10 = Isbn10::new([0, 8, 0, 4, 4, 2, 9, 5, 7, 10]).unwrap();
        assert_eq!(serde_json::to_value(isbn10).unwrap(), "080442957X");

        let isbn13 = Isbn13::from(isbn10);
        let value = serde_json::to_value(Isbn::_13(isbn13)).unwrap();
        assert_eq!(value, "9780804429573");
    }

    #[test]
    fn test_deserialize_validates() {
        let isbn: Isbn = serde_json::from_str("\"978-3-16-148410-0\"").unwrap();
        assert!(isbn.is_isbn13());

        let bad_checksum = serde_json::from_str::<Isbn13>("\"978-3-16-148410-1\"");
        assert!(bad_checksum.is_err());
        let wrong_kind = serde_json::from_str::<Isbn10>("\"978-3-16-148410-0\"");
        assert!(wrong_kind.is_err());
        assert!(serde_json::from_str::<Isbn10>("306406152").is_err());
    }
}
