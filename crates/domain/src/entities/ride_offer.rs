//! Static ride offers shown in the available-rides list

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Driver name shown on every ride detail view
pub const PLACEHOLDER_DRIVER_NAME: &str = "John Doe";

/// Vehicle plate shown on every ride detail view
pub const PLACEHOLDER_VEHICLE_PLATE: &str = "KA 01 AB 1234";

/// One entry of the mock ride catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideOffer {
    pub id: String,
    pub car_type: String,
    /// Currency-formatted fare, e.g. "₹200"
    pub estimated_fare: String,
    /// Formatted pickup time, e.g. "5 min"
    pub estimated_time: String,
}

impl RideOffer {
    fn entry(id: &str, car_type: &str, fare: &str, time: &str) -> Self {
        Self {
            id: id.to_string(),
            car_type: car_type.to_string(),
            estimated_fare: fare.to_string(),
            estimated_time: time.to_string(),
        }
    }
}

/// Detail card for a chosen offer
///
/// Driver and plate are fixed placeholders, not derived from the offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideDetails {
    pub offer: RideOffer,
    pub driver_name: String,
    pub vehicle_plate: String,
}

impl From<RideOffer> for RideDetails {
    fn from(offer: RideOffer) -> Self {
        Self {
            offer,
            driver_name: PLACEHOLDER_DRIVER_NAME.to_string(),
            vehicle_plate: PLACEHOLDER_VEHICLE_PLATE.to_string(),
        }
    }
}

/// Immutable list of ride offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideCatalog {
    offers: Vec<RideOffer>,
}

impl RideCatalog {
    /// Catalog from an explicit list
    #[must_use]
    pub const fn new(offers: Vec<RideOffer>) -> Self {
        Self { offers }
    }

    /// The built-in mock catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            RideOffer::entry("1", "Sedan", "₹200", "5 min"),
            RideOffer::entry("2", "SUV", "₹300", "7 min"),
            RideOffer::entry("3", "Luxury", "₹500", "10 min"),
            RideOffer::entry("4", "Bike", "₹100", "3 min"),
            RideOffer::entry("5", "Hatchback", "₹180", "6 min"),
            RideOffer::entry("6", "Electric", "₹220", "8 min"),
            RideOffer::entry("7", "Van", "₹400", "12 min"),
            RideOffer::entry("8", "Mini", "₹150", "4 min"),
            RideOffer::entry("9", "Micro", "₹120", "3 min"),
            RideOffer::entry("10", "Pickup Truck", "₹450", "15 min"),
        ])
    }

    #[must_use]
    pub fn offers(&self) -> &[RideOffer] {
        &self.offers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Look up an offer by id
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown id.
    pub fn find(&self, id: &str) -> Result<&RideOffer, DomainError> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| DomainError::not_found("RideOffer", id))
    }
}

impl Default for RideCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_ten_offers_in_order() {
        let catalog = RideCatalog::standard();
        assert_eq!(catalog.len(), 10);
        let ids: Vec<&str> = catalog.offers().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_find_known_offer() {
        let catalog = RideCatalog::standard();
        let suv = catalog.find("2").unwrap();
        assert_eq!(suv.car_type, "SUV");
        assert_eq!(suv.estimated_fare, "₹300");
        assert_eq!(suv.estimated_time, "7 min");
    }

    #[test]
    fn test_find_unknown_offer() {
        let err = RideCatalog::standard().find("42").unwrap_err();
        assert_eq!(err.to_string(), "RideOffer not found: 42");
    }

    #[test]
    fn test_details_use_placeholders() {
        let catalog = RideCatalog::standard();
        let a = RideDetails::from(catalog.find("1").unwrap().clone());
        let b = RideDetails::from(catalog.find("3").unwrap().clone());
        assert_eq!(a.driver_name, PLACEHOLDER_DRIVER_NAME);
        assert_eq!(a.driver_name, b.driver_name);
        assert_eq!(a.vehicle_plate, b.vehicle_plate);
    }
}
