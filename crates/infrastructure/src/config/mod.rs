//! Application configuration
//!
//! Split into focused sub-modules:
//! - `geocoding`: Nominatim endpoint and search behavior
//! - `location`: simulated device permission and position
//! - `screens`: menu geometry and timing
//!
//! Sources, lowest precedence first: built-in defaults, `ridehail.toml` in the
//! working directory (or an explicit file), then `RIDEHAIL_*` environment
//! variables with `__` between section and key, e.g.
//! `RIDEHAIL_GEOCODING__MAX_RESULTS=3`.

mod geocoding;
mod location;
mod screens;

use std::path::Path;

use application::SplashConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use geocoding::GeocodingAppConfig;
pub use location::LocationAppConfig;
pub use screens::MenuAppConfig;

/// Prefix of environment overrides
pub const CONFIG_ENV_PREFIX: &str = "RIDEHAIL";

/// Default config file name, looked up without extension
const DEFAULT_CONFIG_NAME: &str = "ridehail";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    #[serde(default)]
    pub location: LocationAppConfig,

    #[serde(default)]
    pub splash: SplashConfig,

    #[serde(default)]
    pub menu: MenuAppConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise `ridehail.toml` is used
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        debug!(base_url = %config.geocoding.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding.validate()?;
        self.location.validate()?;
        self.menu.validate()?;
        if self.splash.initial_scale <= 0.0 {
            return Err("splash.initial_scale must be positive".to_string());
        }
        Ok(())
    }
}
