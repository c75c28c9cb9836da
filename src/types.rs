//! Core types shared by the listing, rendering, and traversal stages.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::time::SystemTime;

/// Sentinel comment emitted at the top of every generated page.
///
/// Its presence anywhere in an existing index file marks that file as
/// machine-owned and safe to regenerate.
pub const MARKER: &str = "<!-- generated by static-indexes -->";

/// Name of the generated index file inside each directory.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Per-directory override spliced into `<head>`.
pub const DEFAULT_HEADER_FILE: &str = "HEADER.html";

/// Per-directory override appended after the listing table.
pub const DEFAULT_README_FILE: &str = "README.html";

/// One directory entry as captured from filesystem metadata.
///
/// `file_name` is the name exactly as the filesystem returned it and is what
/// identifies the entry. `name` is its text form for rendering; names that are
/// not valid UTF-8 carry replacement characters there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub file_name: OsString,
    pub name: String,
    pub is_dir: bool,
    pub modified_at: DateTime<FixedOffset>,
}

impl Entry {
    pub fn new(
        file_name: impl Into<OsString>,
        is_dir: bool,
        modified_at: DateTime<FixedOffset>,
    ) -> Self {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            file_name,
            name,
            is_dir,
            modified_at,
        }
    }

    /// Whether the entry name is dot-prefixed.
    pub fn is_hidden(&self) -> bool {
        self.file_name.as_encoded_bytes().starts_with(b".")
    }
}

/// Zone in which modification times are captured and rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZone {
    #[default]
    Local,
    Utc,
}

impl TimeZone {
    /// Convert a filesystem timestamp into this zone.
    pub fn capture(self, time: SystemTime) -> DateTime<FixedOffset> {
        match self {
            TimeZone::Local => DateTime::<Local>::from(time).fixed_offset(),
            TimeZone::Utc => DateTime::<Utc>::from(time).fixed_offset(),
        }
    }
}
