//! Domain entities - Objects with identity and lifecycle

mod endpoint_selection;
mod menu_item;
mod ride_offer;
mod suggestion;

pub use endpoint_selection::{EndpointSelection, FieldPhase, MIN_QUERY_LEN, is_searchable};
pub use menu_item::MenuItem;
pub use ride_offer::{
    PLACEHOLDER_DRIVER_NAME, PLACEHOLDER_VEHICLE_PLATE, RideCatalog, RideDetails, RideOffer,
};
pub use suggestion::{AddressDetails, Suggestion};
