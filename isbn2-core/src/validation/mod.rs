//! Check digit and text validation for ISBNs
//!
//! This module contains pure functions with no I/O dependencies: check
//! digit arithmetic and the parser that turns text into digit buffers.

pub mod checksum;
pub mod parsing;

pub use checksum::{isbn10_check_digit, isbn13_check_digit};
pub(crate) use parsing::Parser;
