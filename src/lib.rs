#![cfg_attr(not(feature = "runtime-ranges"), no_std)]

//! isbn2 - International Standard Book Numbers
//!
//! This library parses, validates, converts and hyphenates ISBNs.
//!
//! ## Architecture
//!
//! isbn2 follows a core/implementation separation:
//!
//! - **isbn2-core**: ISBN types, check digits, parsing and the range tables
//!   compiled in at build time (`no_std`, no allocation)
//! - **isbn2**: everything in the core plus range messages loaded at run
//!   time from files or readers
//!
//! ## Quick Start
//!
//! ```rust
//! use isbn2::{Isbn, Isbn10, Isbn13};
//!
//! let isbn_10: Isbn10 = "0-306-40615-2".parse().unwrap();
//! let isbn_13 = Isbn13::from(isbn_10);
//!
//! assert_eq!(isbn_13.hyphenate().unwrap().as_str(), "978-0-306-40615-7");
//! assert_eq!(Isbn::from(isbn_13).registration_group(), Ok("English language"));
//! ```
//!
//! ## Features
//!
//! - **runtime-ranges**: load current range messages with [`IsbnRange`]
//! - **serialize**: serde support; ISBNs serialize as digit strings

pub use isbn2_core::{
    isbn10_check_digit, isbn13_check_digit, BuiltinRanges, Group, Hyphenated, Isbn, Isbn10, Isbn13,
    IsbnError, IsbnRef, IsbnResult, RangeLookup, Rule,
};

#[cfg(feature = "runtime-ranges")]
pub mod error;
#[cfg(feature = "runtime-ranges")]
pub mod runtime_ranges;

#[cfg(feature = "runtime-ranges")]
pub use error::IsbnRangeError;
#[cfg(feature = "runtime-ranges")]
pub use runtime_ranges::IsbnRange;
