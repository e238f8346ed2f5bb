//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults of [`GeoNamesConfig`]
//! 2. The configuration file (`--config`, or `./geonames.toml` if present)
//! 3. `GEONAMES_*` environment variables, e.g. `GEONAMES_BASE_URL`,
//!    `GEONAMES_TIMEOUT_SECS` and the account name in `GEONAMES_USER`
//! 4. Command-line flags

use std::path::Path;

use integration_geonames::{GeoNamesConfig, USERNAME_ENV_VAR};
use tracing::debug;

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_NAME: &str = "geonames";

/// Prefix of environment variables read as configuration keys
pub const ENV_PREFIX: &str = "GEONAMES";

/// Values taken from command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub username: Option<String>,
    pub base_url: Option<String>,
}

/// Load the client configuration from file, process environment and flags
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<GeoNamesConfig, config::ConfigError> {
    load_with_env(path, overrides, std::env::vars())
}

/// Load the client configuration with an explicit set of environment variables
pub fn load_with_env(
    path: Option<&Path>,
    overrides: &Overrides,
    env: impl IntoIterator<Item = (String, String)>,
) -> Result<GeoNamesConfig, config::ConfigError> {
    let env: config::Map<String, String> = env.into_iter().collect();

    // GEONAMES_USER does not follow the field name, so it is applied by hand
    let username = overrides
        .username
        .clone()
        .or_else(|| env.get(USERNAME_ENV_VAR).cloned());

    let file = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration file");
            config::File::from(path).required(true)
        },
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        // e.g. GEONAMES_BASE_URL -> base_url
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true)
                .source(Some(env)),
        )
        .set_override_option("username", username)?
        .set_override_option("base_url", overrides.base_url.clone())?;

    let config = builder.build()?;
    config.try_deserialize()
}
