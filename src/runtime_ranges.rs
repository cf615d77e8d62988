//! ISBN ranges loaded at run time
//!
//! The built-in tables are fixed when the crate is compiled. [`IsbnRange`]
//! reads a range message at run time instead, for applications that need
//! current ranges. Up-to-date range messages can be downloaded from
//! <https://www.isbn-international.org/export_rangemessage.xml>.

mod file_io;
mod parser;

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use hashbrown::HashMap;
use isbn2_core::{
    Group, Hyphenated, Isbn10, Isbn13, IsbnError, IsbnRef, IsbnResult, RangeLookup, Rule,
};
use tracing::{debug, warn};

use crate::error::IsbnRangeError;
use parser::{parse_range_message, ParsedGroup, RangeMessage};

/// Rules of one EAN.UCC prefix or registration group
#[derive(Debug, Clone)]
struct Segment {
    name: String,
    rules: Vec<Rule>,
}

impl Segment {
    fn group(&self, segment: u32) -> IsbnResult<Group<'_>> {
        Group::from_rules(&self.name, &self.rules, segment)
    }
}

impl From<ParsedGroup> for Segment {
    fn from(group: ParsedGroup) -> Self {
        Segment {
            name: group.agency,
            rules: group.rules,
        }
    }
}

/// ISBN range message loaded at run time
#[derive(Debug, Clone)]
pub struct IsbnRange {
    source: Option<String>,
    serial_number: Option<String>,
    date: String,
    ean_ucc_group: HashMap<u16, Segment>,
    registration_group: HashMap<(u16, u32), Segment>,
}

impl IsbnRange {
    /// Read the ISBN ranges from a range message file
    ///
    /// ```
    /// use isbn2::{Isbn10, Isbn13, IsbnRange};
    ///
    /// let path = concat!(env!("CARGO_MANIFEST_DIR"), "/isbn2-core/isbn-ranges/RangeMessage.xml");
    /// let isbn_ranges = IsbnRange::from_file(path).unwrap();
    ///
    /// let isbn_10 = Isbn10::new([8, 9, 6, 6, 2, 6, 1, 2, 6, 4]).unwrap();
    /// let isbn_13 = Isbn13::new([9, 7, 8, 1, 4, 9, 2, 0, 6, 7, 6, 6, 5]).unwrap();
    ///
    /// assert_eq!(isbn_ranges.hyphenate(&isbn_10).unwrap().as_str(), "89-6626-126-4");
    /// assert_eq!(isbn_ranges.hyphenate(&isbn_13).unwrap().as_str(), "978-1-4920-6766-5");
    /// ```
    ///
    /// # Errors
    /// If the file cannot be read or the range message is in an unexpected
    /// format, an error will be returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IsbnRangeError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading ISBN range message");
        let mmap = file_io::map_file(path)?;
        Self::from_xml(file_io::mapped_text(&mmap)?)
    }

    /// Read the ISBN ranges from a reader
    ///
    /// # Errors
    /// If reading fails or the range message is in an unexpected format, an
    /// error will be returned.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, IsbnRangeError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_xml(&text)
    }

    /// Parse the ISBN ranges from the text of a range message
    pub fn from_xml(text: &str) -> Result<Self, IsbnRangeError> {
        parse_range_message(text).map(Self::from_message)
    }

    fn from_message(message: RangeMessage) -> Self {
        let RangeMessage {
            source,
            serial_number,
            date,
            ean_ucc,
            registration_groups,
        } = message;

        let mut ean_ucc_group = HashMap::with_capacity(ean_ucc.len());
        for group in ean_ucc {
            let prefix = group.prefix;
            let segment = Segment::from(group);
            if ean_ucc_group.insert(prefix, segment).is_some() {
                warn!(prefix, "EAN.UCC prefix overridden");
            }
        }

        let mut registration_group = HashMap::with_capacity(registration_groups.len());
        for group in registration_groups {
            let key = (group.prefix, group.element);
            let segment = Segment::from(group);
            if registration_group.insert(key, segment).is_some() {
                let (prefix, element) = key;
                warn!(prefix, element, "registration group overridden");
            }
        }

        debug!(
            %date,
            ean_ucc_prefixes = ean_ucc_group.len(),
            registration_groups = registration_group.len(),
            "loaded ISBN range message"
        );

        IsbnRange {
            source,
            serial_number,
            date,
            ean_ucc_group,
            registration_group,
        }
    }

    /// Hyphenate an ISBN into its parts:
    ///
    /// * GS1 Prefix (ISBN-13 only)
    /// * Registration group
    /// * Registrant
    /// * Publication
    /// * Check digit
    ///
    /// # Errors
    /// If the ISBN is not valid, as determined by the loaded ISBN rules, an
    /// error will be returned.
    pub fn hyphenate<'a, I: Into<IsbnRef<'a>>>(&self, isbn: I) -> IsbnResult<Hyphenated> {
        RangeLookup::hyphenate(self, isbn)
    }

    pub fn hyphenate_isbn10(&self, isbn: &Isbn10) -> IsbnResult<Hyphenated> {
        RangeLookup::hyphenate(self, isbn)
    }

    pub fn hyphenate_isbn13(&self, isbn: &Isbn13) -> IsbnResult<Hyphenated> {
        RangeLookup::hyphenate(self, isbn)
    }

    /// Retrieve the name of the registration group.
    ///
    /// ```
    /// use isbn2::{Isbn10, Isbn13, IsbnRange};
    ///
    /// let path = concat!(env!("CARGO_MANIFEST_DIR"), "/isbn2-core/isbn-ranges/RangeMessage.xml");
    /// let isbn_ranges = IsbnRange::from_file(path).unwrap();
    ///
    /// let isbn_10 = Isbn10::new([8, 9, 6, 6, 2, 6, 1, 2, 6, 4]).unwrap();
    /// let isbn_13 = Isbn13::new([9, 7, 8, 1, 4, 9, 2, 0, 6, 7, 6, 6, 5]).unwrap();
    ///
    /// assert_eq!(isbn_ranges.registration_group(&isbn_10), Ok("Korea, Republic"));
    /// assert_eq!(isbn_ranges.registration_group(&isbn_13), Ok("English language"));
    /// ```
    ///
    /// # Errors
    /// If the ISBN is not valid, as determined by `self`, an error will be
    /// returned.
    pub fn registration_group<'a, I: Into<IsbnRef<'a>>>(&self, isbn: I) -> IsbnResult<&str> {
        RangeLookup::registration_group(self, isbn)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Number of EAN.UCC prefixes in the message
    pub fn ean_ucc_prefixes(&self) -> usize {
        self.ean_ucc_group.len()
    }

    /// Number of registration groups in the message
    pub fn registration_groups(&self) -> usize {
        self.registration_group.len()
    }
}

impl RangeLookup for IsbnRange {
    fn ean_ucc_rule(&self, prefix: u16, segment: u32) -> IsbnResult<Group<'_>> {
        self.ean_ucc_group
            .get(&prefix)
            .ok_or(IsbnError::InvalidGroup)?
            .group(segment)
    }

    fn group_rule(&self, prefix: u16, element: u32, segment: u32) -> IsbnResult<Group<'_>> {
        self.registration_group
            .get(&(prefix, element))
            .ok_or(IsbnError::InvalidGroup)?
            .group(segment)
    }
}

impl FromStr for IsbnRange {
    type Err = IsbnRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_xml(s)
    }
}
