//! Place suggestion returned by an address search

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

/// Structured address parts attached to a suggestion when the provider sends them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    pub road: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl AddressDetails {
    /// Compact "city, country" style locality, if any part is known
    #[must_use]
    pub fn locality(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// One candidate place match for a text query
///
/// Latitude and longitude are kept in the provider's string encoding and
/// parsed on demand, so a malformed entry can be detected and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    display_name: String,
    lat: String,
    lon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<AddressDetails>,
}

impl Suggestion {
    /// Create a suggestion from the provider's raw fields
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        lat: impl Into<String>,
        lon: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            lat: lat.into(),
            lon: lon.into(),
            address: None,
        }
    }

    /// Attach structured address details
    #[must_use]
    pub fn with_address(mut self, address: AddressDetails) -> Self {
        self.address = Some(address);
        self
    }

    /// Label shown in the list and copied into the text field on selection
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn lat(&self) -> &str {
        &self.lat
    }

    #[must_use]
    pub fn lon(&self) -> &str {
        &self.lon
    }

    #[must_use]
    pub const fn address(&self) -> Option<&AddressDetails> {
        self.address.as_ref()
    }

    /// Parse the string-encoded position
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if lat/lon are not valid numbers.
    pub fn coordinate(&self) -> Result<Coordinate, DomainError> {
        Coordinate::parse(&self.lat, &self.lon)
    }

    /// Whether the suggestion carries a usable position
    #[must_use]
    pub fn has_valid_coordinate(&self) -> bool {
        self.coordinate().is_ok()
    }
}
