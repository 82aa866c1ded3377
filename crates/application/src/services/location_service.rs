//! One-shot device location fix
//!
//! Permission request followed by a single position read. Every way this can
//! go wrong collapses into a [`LocationFix`] variant so the screen never sees
//! an error.

use std::time::Duration;

use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::ports::DeviceLocationPort;

/// Outcome of asking the device where it is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocationFix {
    Granted { coordinate: Coordinate },
    Denied,
    Failed { reason: String },
}

impl LocationFix {
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Granted { coordinate } => Some(*coordinate),
            Self::Denied | Self::Failed { .. } => None,
        }
    }
}

/// Ask for permission, then read the position once
///
/// Both steps share the same time budget.
#[instrument(skip(device))]
pub async fn locate_device(device: &dyn DeviceLocationPort, budget: Duration) -> LocationFix {
    let attempt = async {
        let permission = match device.request_foreground_permission().await {
            Ok(status) => status,
            Err(e) => {
                return LocationFix::Failed {
                    reason: e.to_string(),
                };
            },
        };
        debug!(%permission, "Location permission answered");

        if !permission.is_granted() {
            return LocationFix::Denied;
        }

        match device.current_position().await {
            Ok(coordinate) => LocationFix::Granted { coordinate },
            Err(e) => LocationFix::Failed {
                reason: e.to_string(),
            },
        }
    };

    let fix = match timeout(budget, attempt).await {
        Ok(fix) => fix,
        Err(_) => LocationFix::Failed {
            reason: format!("No position within {} ms", budget.as_millis()),
        },
    };

    match &fix {
        LocationFix::Granted { coordinate } => info!(%coordinate, "Device located"),
        LocationFix::Denied => info!("Location permission denied"),
        LocationFix::Failed { reason } => warn!(%reason, "Device location failed"),
    }
    fix
}
