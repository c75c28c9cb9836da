//! Directory listing: read one directory's children and decide which to render.

use crate::error::IndexError;
use crate::types::{Entry, TimeZone};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// Filtered, name-ordered view of one directory's entries.
///
/// Keyed by the raw file name, so ordering is byte-lexicographic with files
/// and directories interleaved, and names that only differ in non-UTF-8
/// bytes stay distinct.
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    entries: BTreeMap<OsString, Entry>,
}

impl DirectoryListing {
    /// Display names in render order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name.as_str())
    }

    /// Resolve a raw name back to its entry. Absent names yield `None`.
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&Entry> {
        self.entries.get(name.as_ref())
    }

    /// Entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filters and orders raw entries.
#[derive(Debug, Clone)]
pub struct EntryLister {
    include_hidden: bool,
    reserved_name: String,
}

impl EntryLister {
    /// `reserved_name` is excluded from every listing by exact match.
    pub fn new(include_hidden: bool, reserved_name: impl Into<String>) -> Self {
        Self {
            include_hidden,
            reserved_name: reserved_name.into(),
        }
    }

    /// Build the listing for one directory.
    pub fn list<I>(&self, raw: I) -> DirectoryListing
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut entries = BTreeMap::new();
        for entry in raw {
            if entry.is_hidden() && !self.include_hidden {
                continue;
            }
            if entry.file_name.as_os_str() == OsStr::new(&self.reserved_name) {
                continue;
            }
            entries.insert(entry.file_name.clone(), entry);
        }
        DirectoryListing { entries }
    }
}

/// Read the immediate children of `dir`, unfiltered and sorted by name.
///
/// Symlinks are not followed, so a link to a directory is listed as a file.
/// A child removed between the directory read and its metadata lookup is
/// dropped.
pub fn read_directory(dir: &Path, zone: TimeZone) -> Result<Vec<Entry>, IndexError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for item in walker {
        let item = item.map_err(|e| unreadable(dir, e))?;
        let metadata = match item.metadata() {
            Ok(metadata) => metadata,
            Err(e) if is_vanished(&e) => continue,
            Err(e) => return Err(unreadable(dir, e)),
        };
        let modified = metadata.modified().map_err(|source| IndexError::Unreadable {
            path: item.path().to_path_buf(),
            source,
        })?;
        entries.push(Entry::new(
            item.file_name(),
            metadata.is_dir(),
            zone.capture(modified),
        ));
    }
    Ok(entries)
}

fn is_vanished(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|io| io.kind() == ErrorKind::NotFound)
        .unwrap_or(false)
}

fn unreadable(dir: &Path, err: walkdir::Error) -> IndexError {
    IndexError::Unreadable {
        path: dir.to_path_buf(),
        source: err.into(),
    }
}
