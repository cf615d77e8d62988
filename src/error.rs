//! Errors raised while loading a range message

use thiserror::Error;

/// Errors that can occur while reading an ISBN range message
#[derive(Debug, Error)]
pub enum IsbnRangeError {
    #[error("missing <ISBNRangeMessage> root element")]
    NoIsbnRangeMessageTag,

    #[error("missing <EAN.UCCPrefixes> element")]
    NoEanUccPrefixes,

    #[error("missing <RegistrationGroups> element")]
    NoRegistrationGroups,

    #[error("missing <MessageDate> element")]
    NoMessageDate,

    #[error("missing <{0}> element")]
    MissingElement(&'static str),

    #[error("prefix has more than three digits")]
    PrefixTooLong,

    #[error("prefix contains a non-digit character")]
    InvalidPrefixChar,

    #[error("rule length must be a single digit")]
    BadLengthString,

    #[error("rule length can be at most 7")]
    LengthTooLarge,

    #[error("rule range bounds must be numbers")]
    BadRange,

    #[error("rule range has no dash")]
    NoDashInRange,

    #[error(transparent)]
    Xml(#[from] roxmltree::Error),

    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
