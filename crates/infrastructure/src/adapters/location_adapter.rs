//! Location adapter - Implements DeviceLocationPort from configuration

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{DeviceLocationPort, PermissionStatus};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use tracing::{debug, instrument};

use crate::config::LocationAppConfig;

/// Device location answered from configuration
#[derive(Debug, Clone)]
pub struct ConfiguredLocationAdapter {
    permission: PermissionStatus,
    position: Option<Coordinate>,
    fix_delay: Duration,
}

impl ConfiguredLocationAdapter {
    #[must_use]
    pub const fn new(permission: PermissionStatus, position: Option<Coordinate>) -> Self {
        Self {
            permission,
            position,
            fix_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_fix_delay(mut self, delay: Duration) -> Self {
        self.fix_delay = delay;
        self
    }

    #[must_use]
    pub fn from_config(config: &LocationAppConfig) -> Self {
        Self::new(config.permission, config.coordinate())
            .with_fix_delay(Duration::from_millis(config.fix_delay_ms))
    }
}

#[async_trait]
impl DeviceLocationPort for ConfiguredLocationAdapter {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, ApplicationError> {
        debug!(permission = %self.permission, "Permission prompt answered");
        Ok(self.permission)
    }

    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        if !self.fix_delay.is_zero() {
            tokio::time::sleep(self.fix_delay).await;
        }
        self.position.ok_or_else(|| {
            ApplicationError::LocationUnavailable("No device position configured".to_string())
        })
    }
}
