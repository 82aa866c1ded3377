//! Nominatim address search for ridehail
//!
//! Provides free-text place search (autocomplete) and reverse geocoding via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the interface; [`NominatimGeocodingClient`]
//! implements it over HTTP with an optional in-memory result cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let places = client.search("London", 5).await?;
//! for place in &places {
//!     println!("{} ({}, {})", place.display_name, place.lat, place.lon);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::{NominatimAddress, NominatimPlace};
