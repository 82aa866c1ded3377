//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod endpoint_kind;
mod map_region;

pub use coordinate::Coordinate;
pub use endpoint_kind::EndpointKind;
pub use map_region::{DEFAULT_REGION_DELTA, MapRegion};
