//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::IndexConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with an explicit file layered over the global one
    /// (`$XDG_CONFIG_HOME/static-indexes/config.toml`).
    pub fn load_with(explicit: Option<&Path>) -> Result<IndexConfig, ConfigError> {
        MergeService::load(explicit)
    }

    /// Load configuration from a specific file only, with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<IndexConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
