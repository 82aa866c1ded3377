//! Which trip endpoint a search field edits

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two trip endpoints a user sets via search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// Where the rider is collected
    Pickup,
    /// Where the rider is going
    Dropoff,
}

impl EndpointKind {
    /// Both endpoints, pickup first
    pub const ALL: [Self; 2] = [Self::Pickup, Self::Dropoff];

    /// Placeholder shown in the empty text field
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup location...",
            Self::Dropoff => "Drop-off location...",
        }
    }

    /// Title of the map marker for this endpoint
    #[must_use]
    pub const fn marker_title(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup Location",
            Self::Dropoff => "Drop-off Location",
        }
    }

    /// Short tag used on the command line and in logs
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for EndpointKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pickup" | "pick-up" | "from" => Ok(Self::Pickup),
            "dropoff" | "drop-off" | "to" => Ok(Self::Dropoff),
            _ => Err(format!("Invalid endpoint: {s}. Use 'pickup' or 'dropoff'")),
        }
    }
}
