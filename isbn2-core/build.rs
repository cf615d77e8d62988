//! Build script generating the built-in ISBN range tables
//!
//! Reads the International ISBN Agency range message (by default
//! `isbn-ranges/RangeMessage.xml`, overridable through the
//! `ISBN2_RANGE_MESSAGE` environment variable) and writes
//! `$OUT_DIR/ranges.rs`: the message header as constants plus one sorted
//! static table for the EAN.UCC prefixes and one for the registration
//! groups.

use std::env;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

const DEFAULT_RANGE_MESSAGE: &str = "isbn-ranges/RangeMessage.xml";

/// EAN.UCC prefix or registration group.
struct Group {
    agency: String,
    prefix: u16,
    element: u32,
    rules: Vec<Rule>,
}

/// Range length rule.
struct Rule {
    start: u32,
    end: u32,
    len: u8,
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, Box<dyn Error>> {
    let parent = node.tag_name().name();
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .map(str::trim)
        .ok_or_else(|| format!("missing <{name}> in <{parent}>").into())
}

/// Parse registration group and registrant range length rules.
fn parse_rules(group: Node) -> Result<Vec<Rule>, Box<dyn Error>> {
    group
        .descendants()
        .filter(|n| n.has_tag_name("Rule"))
        .map(|rule| -> Result<Rule, Box<dyn Error>> {
            let range = child_text(rule, "Range")?;
            let (start, end) = range
                .split_once('-')
                .ok_or_else(|| format!("range without dash: {range}"))?;
            let (start, end): (u32, u32) = (start.parse()?, end.parse()?);
            if start > end {
                return Err(format!("range start exceeds end: {range}").into());
            }
            let len: u8 = child_text(rule, "Length")?.parse()?;
            if len > 7 {
                return Err(format!("segment length above 7: {len}").into());
            }
            Ok(Rule { start, end, len })
        })
        .collect()
}

/// Parse EAN.UCC prefix and registration group element.
fn parse_group(group: Node) -> Result<Group, Box<dyn Error>> {
    let prefix_str = child_text(group, "Prefix")?;
    let (prefix, element) = match prefix_str.split_once('-') {
        Some((prefix, element)) => (prefix, element.parse()?),
        None => (prefix_str, 0),
    };
    if prefix.len() != 3 {
        return Err(format!("prefix needs three digits: {prefix_str}").into());
    }

    Ok(Group {
        agency: child_text(group, "Agency")?.to_string(),
        prefix: prefix.parse()?,
        element,
        rules: parse_rules(group)?,
    })
}

fn parse_groups(document: &Document, tag: &str) -> Result<Vec<Group>, Box<dyn Error>> {
    let mut groups = document
        .descendants()
        .filter(|n| n.has_tag_name(tag))
        .map(parse_group)
        .collect::<Result<Vec<_>, _>>()?;
    // Later entries replace earlier ones with the same key
    groups.reverse();
    groups.sort_by_key(|g| (g.prefix, g.element));
    groups.dedup_by_key(|g| (g.prefix, g.element));
    Ok(groups)
}

fn write_optional(out: &mut String, name: &str, value: Option<&str>) -> std::fmt::Result {
    let value = match value {
        Some(value) => format!("Some({value:?})"),
        None => "None".to_string(),
    };
    writeln!(out, "pub(super) const {name}: Option<&str> = {value};")
}

/// Generate a sorted static table of groups.
fn write_table(out: &mut String, name: &str, groups: &[Group]) -> std::fmt::Result {
    writeln!(out, "pub(super) static {name}: &[RangeTable] = &[")?;
    for group in groups {
        writeln!(out, "    RangeTable {{")?;
        writeln!(out, "        prefix: {},", group.prefix)?;
        writeln!(out, "        element: {},", group.element)?;
        writeln!(out, "        agency: {:?},", group.agency)?;
        writeln!(out, "        rules: &[")?;
        for rule in &group.rules {
            writeln!(
                out,
                "            Rule::new({}, {}, {}),",
                rule.start, rule.end, rule.len
            )?;
        }
        writeln!(out, "        ],")?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=ISBN2_RANGE_MESSAGE");
    let path = env::var_os("ISBN2_RANGE_MESSAGE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RANGE_MESSAGE));
    println!("cargo:rerun-if-changed={}", path.display());

    let text = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(&text, options)?;
    let root = document.root_element();
    if !root.has_tag_name("ISBNRangeMessage") {
        return Err("root element must be <ISBNRangeMessage>".into());
    }

    let ean_ucc = parse_groups(&document, "EAN.UCC")?;
    let registration_groups = parse_groups(&document, "Group")?;

    let mut out = String::new();
    let date = child_text(root, "MessageDate")?;
    writeln!(out, "pub(super) const MESSAGE_DATE: &str = {date:?};")?;
    let source = child_text(root, "MessageSource").ok();
    write_optional(&mut out, "MESSAGE_SOURCE", source)?;
    let serial_number = child_text(root, "MessageSerialNumber").ok();
    write_optional(&mut out, "MESSAGE_SERIAL_NUMBER", serial_number)?;
    write_table(&mut out, "EAN_UCC", &ean_ucc)?;
    write_table(&mut out, "REGISTRATION_GROUPS", &registration_groups)?;

    let out_dir = env::var("OUT_DIR")?;
    fs::write(Path::new(&out_dir).join("ranges.rs"), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: &str = r#"<ISBNRangeMessage>
  <RegistrationGroups>
    <Group>
      <Prefix>978-1</Prefix>
      <Agency>Other</Agency>
      <Rules><Rule><Range>0000000-9999999</Range><Length>2</Length></Rule></Rules>
    </Group>
    <Group>
      <Prefix>978-0</Prefix>
      <Agency>First</Agency>
      <Rules><Rule><Range>0000000-9999999</Range><Length>2</Length></Rule></Rules>
    </Group>
    <Group>
      <Prefix>978-0</Prefix>
      <Agency>Second</Agency>
      <Rules><Rule><Range>0000000-9999999</Range><Length>3</Length></Rule></Rules>
    </Group>
  </RegistrationGroups>
</ISBNRangeMessage>"#;

    #[test]
    fn test_later_duplicate_group_wins() {
        let document = Document::parse(GROUPS).unwrap();
        let groups = parse_groups(&document, "Group").unwrap();
        let agencies: Vec<_> = groups.iter().map(|g| g.agency.as_str()).collect();
        assert_eq!(agencies, ["Second", "Other"]);
        assert_eq!(groups[0].rules[0].len, 3);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let groups = GROUPS.replacen("0000000-9999999", "9999999-0000000", 1);
        let document = Document::parse(&groups).unwrap();
        assert!(parse_groups(&document, "Group").is_err());
    }

    #[test]
    fn test_length_above_seven_is_rejected() {
        let groups = GROUPS.replacen("<Length>2</Length>", "<Length>8</Length>", 1);
        let document = Document::parse(&groups).unwrap();
        assert!(parse_groups(&document, "Group").is_err());
    }
}
