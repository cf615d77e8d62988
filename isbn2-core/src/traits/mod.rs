//! Abstract interfaces for ISBN range sources
//!
//! A range source only has to answer rule lookups; hyphenation and
//! registration group resolution are provided on top of that.

pub mod lookup;

pub use lookup::RangeLookup;
