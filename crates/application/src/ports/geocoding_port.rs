//! Geocoding service port
//!
//! Defines the interface for address search and reverse lookup.

use async_trait::async_trait;
use domain::entities::Suggestion;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search places for a free-text query, most relevant first
    ///
    /// Implementations return at most `limit` entries and may include entries
    /// with unparsable coordinates; callers filter those.
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Suggestion>, ApplicationError>;

    /// Describe a coordinate as a human-readable label
    ///
    /// Returns `Ok(None)` when the provider knows nothing at that position.
    async fn reverse(&self, coordinate: &Coordinate) -> Result<Option<String>, ApplicationError>;
}
