//! Geocoding adapter - Implements GeocodingPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::entities::{AddressDetails, Suggestion};
use domain::value_objects::Coordinate;
use integration_nominatim::{
    GeocodingClient, GeocodingError, NominatimAddress, NominatimConfig, NominatimGeocodingClient,
    NominatimPlace,
};
use tracing::{debug, instrument, warn};

/// Address search backed by Nominatim
pub struct NominatimGeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for NominatimGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocodingAdapter")
            .field("client", &"<GeocodingClient>")
            .finish()
    }
}

impl NominatimGeocodingAdapter {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Build the HTTP client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` for an invalid configuration.
    pub fn from_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    fn convert_address(address: &NominatimAddress) -> AddressDetails {
        AddressDetails {
            road: address.road.clone(),
            city: address.settlement().map(str::to_string),
            state: address.state.clone(),
            postcode: address.postcode.clone(),
            country: address.country.clone(),
            country_code: address.country_code.clone(),
        }
    }

    fn convert_place(place: NominatimPlace) -> Suggestion {
        let suggestion = Suggestion::new(place.display_name, place.lat, place.lon);
        match place.address.as_ref() {
            Some(address) => suggestion.with_address(Self::convert_address(address)),
            None => suggestion,
        }
    }

    fn map_error(error: GeocodingError) -> ApplicationError {
        match error {
            GeocodingError::Timeout { timeout_secs } => {
                ApplicationError::Timeout(timeout_secs.saturating_mul(1000))
            },
            GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<Suggestion>, ApplicationError> {
        let places = self.client.search(query, limit).await.map_err(|e| {
            warn!(%query, error = %e, "Place search failed");
            Self::map_error(e)
        })?;

        debug!(count = places.len(), "Converted places to suggestions");
        Ok(places.into_iter().map(Self::convert_place).collect())
    }

    #[instrument(skip(self))]
    async fn reverse(&self, coordinate: &Coordinate) -> Result<Option<String>, ApplicationError> {
        match self
            .client
            .reverse(coordinate.latitude(), coordinate.longitude())
            .await
        {
            Ok(place) if place.display_name.is_empty() => Ok(None),
            Ok(place) => Ok(Some(place.display_name)),
            Err(GeocodingError::NotFound(reason)) => {
                debug!(%reason, "Nothing at position");
                Ok(None)
            },
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
