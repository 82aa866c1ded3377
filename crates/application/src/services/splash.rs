//! Splash screen: zooming logo and the timed hand-off to the home screen

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::animation::{AnimatedValue, Easing};

/// Logo asset geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashLogo {
    pub width: u32,
    pub height: u32,
    pub corner_radius: u32,
}

impl SplashLogo {
    pub const STANDARD: Self = Self {
        width: 350,
        height: 350,
        corner_radius: 200,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Delay before the splash replaces itself with the home screen
    #[serde(default = "default_navigate_after_ms")]
    pub navigate_after_ms: u64,

    /// Length of the logo zoom
    #[serde(default = "default_zoom_duration_ms")]
    pub zoom_duration_ms: u64,

    /// Logo scale when the splash appears
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,
}

const fn default_navigate_after_ms() -> u64 {
    2000
}

const fn default_zoom_duration_ms() -> u64 {
    2500
}

const fn default_initial_scale() -> f64 {
    0.3
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            navigate_after_ms: default_navigate_after_ms(),
            zoom_duration_ms: default_zoom_duration_ms(),
            initial_scale: default_initial_scale(),
        }
    }
}

/// What the splash wants after a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashStep {
    Showing { scale: f64 },
    /// Replace the splash with the home screen; emitted exactly once
    Navigate,
}

#[derive(Debug, Clone)]
pub struct SplashScreen {
    scale: AnimatedValue,
    elapsed: Duration,
    navigate_after: Duration,
    navigated: bool,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new(&SplashConfig::default())
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new(config: &SplashConfig) -> Self {
        let mut scale = AnimatedValue::new(config.initial_scale);
        scale.animate_to(
            1.0,
            Duration::from_millis(config.zoom_duration_ms),
            Easing::EaseInOutCubic,
        );
        Self {
            scale,
            elapsed: Duration::ZERO,
            navigate_after: Duration::from_millis(config.navigate_after_ms),
            navigated: false,
        }
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale.value()
    }

    #[must_use]
    pub const fn logo(&self) -> SplashLogo {
        SplashLogo::STANDARD
    }

    #[must_use]
    pub const fn has_navigated(&self) -> bool {
        self.navigated
    }

    /// Advance one frame
    ///
    /// Navigation fires on schedule whether or not the zoom has finished.
    pub fn tick(&mut self, dt: Duration) -> SplashStep {
        self.elapsed += dt;
        let scale = self.scale.tick(dt);
        if !self.navigated && self.elapsed >= self.navigate_after {
            self.navigated = true;
            return SplashStep::Navigate;
        }
        SplashStep::Showing { scale }
    }
}
