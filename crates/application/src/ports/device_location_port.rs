//! Device location port
//!
//! Permission request plus a one-shot position read, mirroring what mobile
//! location services expose.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApplicationError;

/// Outcome of a foreground location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user has not answered (treated as denied)
    Undetermined,
}

impl PermissionStatus {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

impl std::str::FromStr for PermissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "granted" | "allow" => Ok(Self::Granted),
            "denied" | "deny" => Ok(Self::Denied),
            "undetermined" => Ok(Self::Undetermined),
            _ => Err(format!(
                "Invalid permission: {s}. Use 'granted', 'denied' or 'undetermined'"
            )),
        }
    }
}

/// Port for the device's location service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Ask the user for foreground location access
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, ApplicationError>;

    /// Read the current position once
    async fn current_position(&self) -> Result<Coordinate, ApplicationError>;
}
