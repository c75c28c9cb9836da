//! Overwrite safety for existing index files.
//!
//! A file is machine-owned iff its bytes contain [`MARKER`] anywhere. Only
//! machine-owned or absent index files may be replaced.

use crate::types::MARKER;
use memchr::memmem;
use std::path::Path;

/// What was found at an index path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing readable at the path.
    Absent,
    /// A previously generated page, with its current bytes.
    Generated(Vec<u8>),
    /// Content without the marker. Must be left untouched.
    HandWritten,
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        !matches!(self, Verdict::HandWritten)
    }

    /// Current bytes of a generated page, if any.
    pub fn existing(&self) -> Option<&[u8]> {
        match self {
            Verdict::Generated(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

/// Inspect the file at `path`. Any read failure counts as absence.
pub fn inspect(path: &Path) -> Verdict {
    match std::fs::read(path) {
        Err(_) => Verdict::Absent,
        Ok(bytes) if contains_marker(&bytes) => Verdict::Generated(bytes),
        Ok(_) => Verdict::HandWritten,
    }
}

pub fn contains_marker(bytes: &[u8]) -> bool {
    memmem::find(bytes, MARKER.as_bytes()).is_some()
}
