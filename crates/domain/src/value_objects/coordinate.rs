//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A point on the map with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if either value is not finite,
    /// latitude is not in [-90, 90] or longitude is not in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinate(format!(
                "{latitude}, {longitude} is not a finite position"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate(format!(
                "{latitude}, {longitude} is out of range"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation (for constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a coordinate from the string-encoded decimals geocoders return
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` when either part is not a
    /// number or the resulting position is out of range.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, DomainError> {
        let lat = latitude.trim().parse::<f64>().map_err(|_| {
            DomainError::InvalidCoordinate(format!("latitude {latitude:?} is not a number"))
        })?;
        let lon = longitude.trim().parse::<f64>().map_err(|_| {
            DomainError::InvalidCoordinate(format!("longitude {longitude:?} is not a number"))
        })?;
        Self::new(lat, lon)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Well-known places used as fallbacks and in tests
impl Coordinate {
    /// London, UK
    #[must_use]
    pub const fn london() -> Self {
        Self::new_unchecked(51.5074, -0.1278)
    }

    /// Bengaluru, India
    #[must_use]
    pub const fn bengaluru() -> Self {
        Self::new_unchecked(12.9716, 77.5946)
    }
}
