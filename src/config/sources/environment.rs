//! Environment variable source: STATIC_INDEXES_ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "STATIC_INDEXES";

/// Add environment variable overlay to builder.
/// Uses STATIC_INDEXES prefix and __ as separator, e.g. `STATIC_INDEXES__RECURSIVE=true`
/// or `STATIC_INDEXES__LOGGING__LEVEL=debug`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
