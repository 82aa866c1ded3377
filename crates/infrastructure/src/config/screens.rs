//! Screen presentation settings

use std::time::Duration;

use application::MenuPanel;
use serde::{Deserialize, Serialize};

/// Menu configuration (`[menu]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuAppConfig {
    /// Panel width; also the closed offset (default: 300)
    #[serde(default = "default_width")]
    pub width: f64,

    /// Slide duration in milliseconds (default: 300)
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
}

const fn default_width() -> f64 {
    300.0
}

const fn default_slide_duration_ms() -> u64 {
    300
}

impl Default for MenuAppConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            slide_duration_ms: default_slide_duration_ms(),
        }
    }
}

impl MenuAppConfig {
    #[must_use]
    pub fn build_panel(&self) -> MenuPanel {
        MenuPanel::new(self.width, Duration::from_millis(self.slide_duration_ms))
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns a message if the width is not a positive number.
    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("menu.width must be positive, got {}", self.width));
        }
        Ok(())
    }
}
