//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod location_adapter;

pub use geocoding_adapter::NominatimGeocodingAdapter;
pub use location_adapter::ConfiguredLocationAdapter;
