//! File access for range messages

use memmap2::Mmap;
use std::{fs::File, path::Path};

use crate::error::IsbnRangeError;

/// Map a range message file into memory
pub(crate) fn map_file(path: &Path) -> Result<Mmap, IsbnRangeError> {
    let file = File::open(path)?;
    // SAFETY: the mapping is read-only and dropped once the message has been
    // parsed into owned tables; the file is not modified by this crate.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(mmap)
}

/// Borrow the mapped bytes as UTF-8 text
pub(crate) fn mapped_text(mmap: &Mmap) -> Result<&str, IsbnRangeError> {
    Ok(std::str::from_utf8(mmap)?)
}
