//! ISBN range rules and the built-in range tables
//!
//! The International ISBN Agency publishes, for every EAN.UCC prefix and
//! registration group, a list of rules mapping a seven-digit segment of the
//! number to the length of the next element. The tables in this module are
//! generated at build time from `isbn-ranges/RangeMessage.xml`.

use crate::traits::RangeLookup;
use crate::{IsbnError, IsbnResult};

/// Range length rule: segments in `start..=end` have an element of `length`
/// digits. A length of 0 marks a range that is not in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub start: u32,
    pub end: u32,
    pub length: u8,
}

impl Rule {
    pub const fn new(start: u32, end: u32, length: u8) -> Self {
        Self { start, end, length }
    }

    pub const fn contains(&self, segment: u32) -> bool {
        segment >= self.start && segment <= self.end
    }
}

/// Element length for `segment` under the first rule that covers it
pub fn find_length(rules: &[Rule], segment: u32) -> IsbnResult<usize> {
    let rule = rules
        .iter()
        .find(|rule| rule.contains(segment))
        .ok_or(IsbnError::InvalidGroup)?;
    match rule.length {
        0 => Err(IsbnError::UndefinedRange),
        length => Ok(usize::from(length)),
    }
}

/// Result of a rule lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    /// Agency responsible for the prefix or registration group
    pub name: &'a str,
    /// Length of the next element
    pub segment_length: usize,
}

impl<'a> Group<'a> {
    pub fn from_rules(name: &'a str, rules: &[Rule], segment: u32) -> IsbnResult<Self> {
        Ok(Group {
            name,
            segment_length: find_length(rules, segment)?,
        })
    }
}

/// Built-in table for one EAN.UCC prefix or registration group
#[derive(Debug)]
pub struct RangeTable {
    pub prefix: u16,
    /// Registration group element; 0 for EAN.UCC prefix tables
    pub element: u32,
    pub agency: &'static str,
    pub rules: &'static [Rule],
}

mod generated {
    use super::{RangeTable, Rule};

    include!(concat!(env!("OUT_DIR"), "/ranges.rs"));
}

/// Range tables compiled into the crate
///
/// The bundled `isbn-ranges/RangeMessage.xml` only covers a handful of
/// registration groups (English, French, German, Czech/Slovak, Brazil,
/// Korea, Greece, Singapore, Qatar and the 979 groups for France and the
/// United States). ISBNs of any other group fail with
/// [`IsbnError::InvalidGroup`]. To cover every group, either set
/// `ISBN2_RANGE_MESSAGE` to a full range message from the International ISBN
/// Agency when building, or load one at run time with `isbn2::IsbnRange`.
///
/// ```
/// use isbn2_core::{BuiltinRanges, Isbn13, RangeLookup};
///
/// let isbn13: Isbn13 = "9783161484100".parse().unwrap();
/// assert_eq!(BuiltinRanges.hyphenate(&isbn13).unwrap().as_str(), "978-3-16-148410-0");
/// assert!(!BuiltinRanges.date().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinRanges;

pub(crate) static BUILTIN_RANGES: BuiltinRanges = BuiltinRanges;

impl BuiltinRanges {
    fn table(
        tables: &'static [RangeTable],
        prefix: u16,
        element: u32,
    ) -> IsbnResult<&'static RangeTable> {
        tables
            .binary_search_by_key(&(prefix, element), |t| (t.prefix, t.element))
            .ok()
            .and_then(|i| tables.get(i))
            .ok_or(IsbnError::InvalidGroup)
    }

    /// Date of the bundled range message
    pub fn date(&self) -> &'static str {
        generated::MESSAGE_DATE
    }

    pub fn serial_number(&self) -> Option<&'static str> {
        generated::MESSAGE_SERIAL_NUMBER
    }

    pub fn source(&self) -> Option<&'static str> {
        generated::MESSAGE_SOURCE
    }

    /// Number of EAN.UCC prefix tables
    pub fn ean_ucc_prefixes(&self) -> usize {
        generated::EAN_UCC.len()
    }

    /// Number of registration group tables
    pub fn registration_groups(&self) -> usize {
        generated::REGISTRATION_GROUPS.len()
    }
}

impl RangeLookup for BuiltinRanges {
    fn ean_ucc_rule(&self, prefix: u16, segment: u32) -> IsbnResult<Group<'_>> {
        let table = Self::table(generated::EAN_UCC, prefix, 0)?;
        Group::from_rules(table.agency, table.rules, segment)
    }

    fn group_rule(&self, prefix: u16, element: u32, segment: u32) -> IsbnResult<Group<'_>> {
        let table = Self::table(generated::REGISTRATION_GROUPS, prefix, element)?;
        Group::from_rules(table.agency, table.rules, segment)
    }
}
