//! Domain layer for ridehail
//!
//! Contains the ubiquitous language of the rider app: coordinates and map
//! viewports, place suggestions, pickup/drop-off endpoints and the static
//! ride catalog. This layer has no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
