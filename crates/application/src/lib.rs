//! Application layer - Screen state and use cases
//!
//! Holds the home and splash screen state machines, the search/selection
//! flow, and the port definitions for geocoding, device location and
//! user-visible notices. Adapters in the infrastructure layer implement the
//! ports; front-ends render the state.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
