//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_location_port;
mod geocoding_port;
mod notice_port;

#[cfg(test)]
pub use device_location_port::MockDeviceLocationPort;
pub use device_location_port::{DeviceLocationPort, PermissionStatus};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use notice_port::MockNoticePort;
pub use notice_port::{Notice, NoticeKind, NoticePort};
