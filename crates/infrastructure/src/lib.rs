//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Nominatim
//! client and the configured device location, and owns configuration loading
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, GeocodingAppConfig, LocationAppConfig, MenuAppConfig, CONFIG_ENV_PREFIX,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
