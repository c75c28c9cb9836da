//! Configuration
//!
//! Layered configuration for index generation. Sources, lowest precedence
//! first: built-in defaults, the global config file, an explicit `--config`
//! file, and `STATIC_INDEXES__*` environment variables.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

use crate::assets::AssetsConfig;
use crate::logging::LoggingConfig;
use crate::types::{TimeZone, DEFAULT_HEADER_FILE, DEFAULT_INDEX_FILE, DEFAULT_README_FILE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which child directories a recursive run descends into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiddenRecursion {
    /// Descend into every child directory, except hidden ones when hidden
    /// entries are *included*. Note the inversion: with hidden entries
    /// excluded from listings, hidden directories are still descended into.
    #[default]
    SkipWhenIncluded,
    /// Descend only into child directories that appear in the listing.
    FollowListing,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// List dot-prefixed entries
    #[serde(default)]
    pub include_hidden: bool,

    #[serde(default)]
    pub hidden_recursion: HiddenRecursion,

    /// Generated file name; also excluded from every listing
    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_header_file")]
    pub header_file: String,

    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// Zone for rendered modification times
    #[serde(default)]
    pub timezone: TimeZone,

    /// Extra icon mappings (lowercase name or `.ext` -> icon id)
    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_header_file() -> String {
    DEFAULT_HEADER_FILE.to_string()
}

fn default_readme_file() -> String {
    DEFAULT_README_FILE.to_string()
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            include_hidden: false,
            hidden_recursion: HiddenRecursion::default(),
            index_file: default_index_file(),
            header_file: default_header_file(),
            readme_file: default_readme_file(),
            timezone: TimeZone::default(),
            icons: BTreeMap::new(),
            assets: AssetsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
