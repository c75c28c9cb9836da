//! Icon resolution for listing rows.
//!
//! Icons are picked purely from the entry name: directories always get the
//! folder icon, files are looked up by their whole lowercased name and then by
//! their lowercased extension, falling back to the `default` icon.

use crate::error::IndexError;
use crate::types::Entry;
use std::collections::BTreeMap;

/// Key of the mandatory fallback icon.
pub const DEFAULT_ICON_KEY: &str = "default";

/// Icon used for every directory.
pub const FOLDER_ICON: &str = "folder-open";

const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("default", "file-alt"),
    (".epub", "book"),
    (".jpeg", "file-image"),
    (".jpg", "file-image"),
    (".gif", "file-image"),
    (".tiff", "file-image"),
    (".pdf", "file-pdf"),
    (".mov", "file-movie"),
    (".avi", "file-movie"),
    (".zip", "file-archive"),
    (".rar", "file-archive"),
    (".tar", "file-archive"),
    (".tgz", "file-archive"),
];

/// Read-only mapping from lowercase name or extension to icon identifier.
#[derive(Debug, Clone)]
pub struct IconTable {
    icons: BTreeMap<String, String>,
    fallback: String,
}

impl IconTable {
    /// Build a table from arbitrary mappings. Keys are lowercased.
    pub fn from_map<I, K, V>(mappings: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let icons: BTreeMap<String, String> = mappings
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        let fallback = icons.get(DEFAULT_ICON_KEY).cloned().ok_or_else(|| {
            IndexError::ConfigError(format!(
                "icon table is missing the required '{}' entry",
                DEFAULT_ICON_KEY
            ))
        })?;
        Ok(Self { icons, fallback })
    }

    /// Built-in table extended (or overridden) by `extra`.
    pub fn with_overrides(extra: &BTreeMap<String, String>) -> Result<Self, IndexError> {
        let merged = BUILTIN_ICONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .chain(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from_map(merged)
    }

    /// Icon for a file name.
    pub fn lookup(&self, file_name: &str) -> &str {
        let lower = file_name.to_lowercase();
        if let Some(icon) = self.icons.get(&lower) {
            return icon;
        }
        extension_key(&lower)
            .and_then(|ext| self.icons.get(ext))
            .unwrap_or(&self.fallback)
    }

    /// Number of mappings, `default` included.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self {
            icons: BUILTIN_ICONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fallback: BUILTIN_ICONS[0].1.to_string(),
        }
    }
}

/// `.ext` suffix of a name, dot included. A leading dot alone is not an extension.
fn extension_key(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Display decision for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon<'a> {
    pub icon: &'a str,
    /// Entry name, `/`-suffixed for directories. Used for both link target and text.
    pub display_name: String,
}

/// Resolve the icon and display name of an entry.
pub fn resolve<'a>(table: &'a IconTable, entry: &Entry) -> ResolvedIcon<'a> {
    if entry.is_dir {
        ResolvedIcon {
            icon: FOLDER_ICON,
            display_name: format!("{}/", entry.name),
        }
    } else {
        ResolvedIcon {
            icon: table.lookup(&entry.name),
            display_name: entry.name.clone(),
        }
    }
}
