//! Map viewport value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;

/// Zoom delta applied whenever the map jumps to a confirmed location
pub const DEFAULT_REGION_DELTA: f64 = 0.01;

/// The visible map viewport: a center plus the degrees spanned on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    center: Coordinate,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl MapRegion {
    /// Create a region with explicit deltas
    #[must_use]
    pub const fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Region centered on `center` with the standard 0.01° zoom
    #[must_use]
    pub const fn centered_on(center: Coordinate) -> Self {
        Self::new(center, DEFAULT_REGION_DELTA, DEFAULT_REGION_DELTA)
    }

    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.center.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.center.longitude()
    }

    #[must_use]
    pub const fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    #[must_use]
    pub const fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }
}

impl fmt::Display for MapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (±{}°, ±{}°)",
            self.center, self.latitude_delta, self.longitude_delta
        )
    }
}
