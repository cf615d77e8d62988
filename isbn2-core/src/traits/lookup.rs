//! Range lookup trait and the hyphenation algorithm built on it

use crate::format::constants::SEGMENT_DIGITS;
use crate::format::{digit_char, Hyphenated, IsbnRef};
use crate::ranges::Group;
use crate::{IsbnError, IsbnResult};

/// Trait for sources of ISBN range rules
///
/// Implemented by [`BuiltinRanges`](crate::BuiltinRanges) for the tables
/// compiled into the crate, and by run-time range messages in `isbn2`.
pub trait RangeLookup {
    /// Find the rule under an EAN.UCC prefix covering `segment`
    ///
    /// The returned length is the length of the registration group element.
    fn ean_ucc_rule(&self, prefix: u16, segment: u32) -> IsbnResult<Group<'_>>;

    /// Find the rule of a registration group covering `segment`
    ///
    /// The returned length is the length of the registrant element.
    fn group_rule(&self, prefix: u16, element: u32, segment: u32) -> IsbnResult<Group<'_>>;

    /// Hyphenate an ISBN into its parts:
    ///
    /// * GS1 prefix (ISBN-13 only)
    /// * Registration group
    /// * Registrant
    /// * Publication
    /// * Check digit
    ///
    /// # Errors
    /// `InvalidGroup` if no rule covers the ISBN, `UndefinedRange` if the
    /// covering rule is not in use.
    fn hyphenate<'a, I: Into<IsbnRef<'a>>>(&self, isbn: I) -> IsbnResult<Hyphenated> {
        let isbn = isbn.into();
        let layout = locate(self, &isbn)?;
        hyphenate_with(&isbn, layout.group_length, layout.registrant_length)
    }

    /// Name of the registration group the ISBN belongs to
    fn registration_group<'a, I: Into<IsbnRef<'a>>>(&self, isbn: I) -> IsbnResult<&str> {
        let isbn = isbn.into();
        Ok(locate(self, &isbn)?.agency)
    }
}

/// Element lengths of a located ISBN
struct Layout<'r> {
    group_length: usize,
    registrant_length: usize,
    agency: &'r str,
}

fn locate<'r, R: RangeLookup + ?Sized>(
    ranges: &'r R,
    isbn: &IsbnRef<'_>,
) -> IsbnResult<Layout<'r>> {
    let prefix = isbn.prefix();
    let body = isbn.body();

    let group_length = ranges
        .ean_ucc_rule(prefix, segment(body, 0))?
        .segment_length;
    let registrant = ranges.group_rule(
        prefix,
        element(body, group_length),
        segment(body, group_length),
    )?;

    Ok(Layout {
        group_length,
        registrant_length: registrant.segment_length,
        agency: registrant.name,
    })
}

/// Seven-digit rule segment starting at `offset`, zero padded past the end
fn segment(body: &[u8], offset: usize) -> u32 {
    (0..SEGMENT_DIGITS).fold(0, |acc, i| {
        acc * 10 + u32::from(body.get(offset + i).copied().unwrap_or(0))
    })
}

/// Decimal value of the first `length` digits
fn element(body: &[u8], length: usize) -> u32 {
    body.iter()
        .take(length)
        .fold(0, |acc, &d| acc * 10 + u32::from(d))
}

fn hyphenate_with(
    isbn: &IsbnRef<'_>,
    group_length: usize,
    registrant_length: usize,
) -> IsbnResult<Hyphenated> {
    let body = isbn.body();
    let registrant_end = group_length + registrant_length;
    // At least one publication digit must remain
    if registrant_end >= body.len() {
        return Err(IsbnError::InvalidGroup);
    }

    let mut out = Hyphenated::new();
    if isbn.has_prefix() {
        let prefix = isbn.prefix();
        for d in [prefix / 100, prefix / 10 % 10, prefix % 10] {
            out.push(digit_char(d as u8));
        }
        out.push('-');
    }
    for (i, &d) in body.iter().enumerate() {
        if i == group_length || i == registrant_end {
            out.push('-');
        }
        out.push(digit_char(d));
    }
    out.push('-');
    out.push(digit_char(isbn.check_digit()));
    Ok(out)
}
