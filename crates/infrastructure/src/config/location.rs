//! Device location configuration
//!
//! A terminal has no GPS, so the device's answer to the permission prompt and
//! its position come from configuration.

use application::{HomeSettings, PermissionStatus};
use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};

/// Device location configuration (`[location]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAppConfig {
    /// Answer to the permission prompt (default: granted)
    #[serde(default = "default_permission")]
    pub permission: PermissionStatus,

    /// Reported latitude; without both coordinates the read fails
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Reported longitude
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Simulated latency of the position read in milliseconds
    #[serde(default)]
    pub fix_delay_ms: u64,

    /// Time budget for permission plus position read (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_permission() -> PermissionStatus {
    PermissionStatus::Granted
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for LocationAppConfig {
    fn default() -> Self {
        Self {
            permission: default_permission(),
            latitude: None,
            longitude: None,
            fix_delay_ms: 0,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl LocationAppConfig {
    /// Configured position, if both parts are set and valid
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon).ok(),
            _ => None,
        }
    }

    /// Controller settings derived from this section and the geocoding flag
    #[must_use]
    pub const fn to_home_settings(&self, label_device_location: bool) -> HomeSettings {
        HomeSettings {
            location_timeout_ms: self.timeout_ms,
            label_device_location,
        }
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns a message if only one coordinate is set or the pair is out of range.
    pub fn validate(&self) -> Result<(), String> {
        match (self.latitude, self.longitude) {
            (None, None) => {},
            (Some(lat), Some(lon)) => {
                Coordinate::new(lat, lon).map_err(|e| format!("location: {e}"))?;
            },
            _ => {
                return Err(
                    "location.latitude and location.longitude must be set together".to_string(),
                );
            },
        }
        if self.timeout_ms == 0 {
            return Err("location.timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}
