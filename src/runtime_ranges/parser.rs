//! Range message XML parsing
//!
//! Turns the text of an International ISBN Agency `RangeMessage.xml` into
//! owned groups and rules. Structure and value errors are reported with
//! [`IsbnRangeError`] variants; no partial message is ever returned.

use isbn2_core::Rule;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::IsbnRangeError;

/// Longest segment length a rule may declare
const MAX_SEGMENT_LENGTH: u8 = 7;

/// Most digits a registration group element may have
const MAX_ELEMENT_DIGITS: usize = 9;

/// Parsed range message
#[derive(Debug)]
pub(crate) struct RangeMessage {
    pub(crate) source: Option<String>,
    pub(crate) serial_number: Option<String>,
    pub(crate) date: String,
    pub(crate) ean_ucc: Vec<ParsedGroup>,
    pub(crate) registration_groups: Vec<ParsedGroup>,
}

/// EAN.UCC prefix or registration group with its rules
#[derive(Debug)]
pub(crate) struct ParsedGroup {
    pub(crate) prefix: u16,
    /// Registration group element, 0 for EAN.UCC prefixes
    pub(crate) element: u32,
    pub(crate) agency: String,
    pub(crate) rules: Vec<Rule>,
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Parse an EAN.UCC prefix such as `978`.
fn parse_ean_ucc_prefix(prefix: &str) -> Result<u16, IsbnRangeError> {
    let mut value = 0u16;
    for (i, c) in prefix.chars().enumerate() {
        if i == 3 {
            return Err(IsbnRangeError::PrefixTooLong);
        }
        let digit = c.to_digit(10).ok_or(IsbnRangeError::InvalidPrefixChar)?;
        value = value * 10 + digit as u16;
    }
    Ok(value)
}

/// Parse a registration group prefix such as `978-99921`.
fn parse_group_prefix(prefix: &str) -> Result<(u16, u32), IsbnRangeError> {
    let (ean_ucc, element) = match prefix.split_once('-') {
        Some(parts) => parts,
        None if prefix.len() > 3 => return Err(IsbnRangeError::PrefixTooLong),
        None => return Err(IsbnRangeError::InvalidPrefixChar),
    };
    if element.is_empty() {
        return Err(IsbnRangeError::InvalidPrefixChar);
    }
    if element.len() > MAX_ELEMENT_DIGITS {
        return Err(IsbnRangeError::PrefixTooLong);
    }

    let mut value = 0u32;
    for c in element.chars() {
        let digit = c.to_digit(10).ok_or(IsbnRangeError::InvalidPrefixChar)?;
        value = value * 10 + digit;
    }
    Ok((parse_ean_ucc_prefix(ean_ucc)?, value))
}

/// Parse a `start-end` rule range.
fn parse_range(range: &str) -> Result<(u32, u32), IsbnRangeError> {
    let (start, end) = range.split_once('-').ok_or(IsbnRangeError::NoDashInRange)?;
    let start: u32 = start.parse().map_err(|_| IsbnRangeError::BadRange)?;
    let end: u32 = end.parse().map_err(|_| IsbnRangeError::BadRange)?;
    if start > end {
        return Err(IsbnRangeError::BadRange);
    }
    Ok((start, end))
}

/// Parse a single-digit rule length.
fn parse_length(length: &str) -> Result<u8, IsbnRangeError> {
    if length.len() != 1 {
        return Err(IsbnRangeError::BadLengthString);
    }
    let length: u8 = length
        .parse()
        .map_err(|_| IsbnRangeError::BadLengthString)?;
    if length > MAX_SEGMENT_LENGTH {
        return Err(IsbnRangeError::LengthTooLarge);
    }
    Ok(length)
}

fn parse_rules(group: Node) -> Result<Vec<Rule>, IsbnRangeError> {
    let rules = child(group, "Rules").ok_or(IsbnRangeError::MissingElement("Rules"))?;
    rules
        .children()
        .filter(|n| n.has_tag_name("Rule"))
        .map(|rule| -> Result<Rule, IsbnRangeError> {
            let range = child_text(rule, "Range").ok_or(IsbnRangeError::MissingElement("Range"))?;
            let length =
                child_text(rule, "Length").ok_or(IsbnRangeError::MissingElement("Length"))?;
            let (start, end) = parse_range(range)?;
            Ok(Rule::new(start, end, parse_length(length)?))
        })
        .collect()
}

fn parse_group(
    group: Node,
    parse_prefix: fn(&str) -> Result<(u16, u32), IsbnRangeError>,
) -> Result<ParsedGroup, IsbnRangeError> {
    let prefix = child_text(group, "Prefix").ok_or(IsbnRangeError::MissingElement("Prefix"))?;
    let (prefix, element) = parse_prefix(prefix)?;
    let agency = child_text(group, "Agency").ok_or(IsbnRangeError::MissingElement("Agency"))?;

    Ok(ParsedGroup {
        prefix,
        element,
        agency: agency.to_string(),
        rules: parse_rules(group)?,
    })
}

fn parse_groups(
    parent: Node,
    tag: &str,
    parse_prefix: fn(&str) -> Result<(u16, u32), IsbnRangeError>,
) -> Result<Vec<ParsedGroup>, IsbnRangeError> {
    parent
        .children()
        .filter(|n| n.has_tag_name(tag))
        .map(|group| parse_group(group, parse_prefix))
        .collect()
}

/// Parse the text of a range message
pub(crate) fn parse_range_message(text: &str) -> Result<RangeMessage, IsbnRangeError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;

    let root = document.root_element();
    if !root.has_tag_name("ISBNRangeMessage") {
        return Err(IsbnRangeError::NoIsbnRangeMessageTag);
    }

    let date = child_text(root, "MessageDate").ok_or(IsbnRangeError::NoMessageDate)?;
    let source = child_text(root, "MessageSource");
    let serial_number = child_text(root, "MessageSerialNumber");

    let prefixes = child(root, "EAN.UCCPrefixes").ok_or(IsbnRangeError::NoEanUccPrefixes)?;
    let ean_ucc = parse_groups(prefixes, "EAN.UCC", |prefix| {
        parse_ean_ucc_prefix(prefix).map(|prefix| (prefix, 0))
    })?;

    let groups = child(root, "RegistrationGroups").ok_or(IsbnRangeError::NoRegistrationGroups)?;
    let registration_groups = parse_groups(groups, "Group", parse_group_prefix)?;

    Ok(RangeMessage {
        source: source.map(str::to_string),
        serial_number: serial_number.map(str::to_string),
        date: date.to_string(),
        ean_ucc,
        registration_groups,
    })
}
