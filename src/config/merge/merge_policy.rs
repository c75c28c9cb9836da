//! Built-in defaults seeded into every config builder.

use crate::types::{DEFAULT_HEADER_FILE, DEFAULT_INDEX_FILE, DEFAULT_README_FILE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder with the scalar defaults set. Nested tables fall back to serde defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("recursive", false)?
        .set_default("include_hidden", false)?
        .set_default("hidden_recursion", "skip-when-included")?
        .set_default("index_file", DEFAULT_INDEX_FILE)?
        .set_default("header_file", DEFAULT_HEADER_FILE)?
        .set_default("readme_file", DEFAULT_README_FILE)?
        .set_default("timezone", "local")
}
