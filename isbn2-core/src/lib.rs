#![cfg_attr(not(test), no_std)]

//! isbn2 Core - ISBN types, check digits and range tables
//!
//! This crate provides the allocation-free part of isbn2: validated
//! [`Isbn10`] / [`Isbn13`] values, text parsing, conversion between the two
//! formats and hyphenation against range tables generated at build time
//! from the International ISBN Agency range message.
//!
//! ```
//! use isbn2_core::{Isbn, Isbn10, Isbn13};
//!
//! let isbn_10 = Isbn::_10(Isbn10::new([8, 9, 6, 6, 2, 6, 1, 2, 6, 4]).unwrap());
//! let isbn_13 = Isbn::_13(Isbn13::new([9, 7, 8, 1, 4, 9, 2, 0, 6, 7, 6, 6, 5]).unwrap());
//!
//! assert_eq!(isbn_10.hyphenate().unwrap().as_str(), "89-6626-126-4");
//! assert_eq!(isbn_13.registration_group(), Ok("English language"));
//! assert_eq!("978-1-4920-6766-5".parse(), Ok(isbn_13));
//! ```

pub mod error;
pub mod format;
pub mod ranges;
pub mod traits;
pub mod validation;

// Runs the range table generator's own tests
#[cfg(test)]
#[allow(dead_code)]
#[path = "../build.rs"]
mod build_script;

pub use error::*;
pub use format::*;
pub use ranges::{BuiltinRanges, Group, Rule};
pub use traits::RangeLookup;
pub use validation::{isbn10_check_digit, isbn13_check_digit};
