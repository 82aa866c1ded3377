//! Slide-in navigation menu

use std::time::Duration;

use domain::entities::MenuItem;
use tracing::debug;

use super::animation::{AnimatedValue, Easing};

/// Default panel width in points; the closed offset is its negation
pub const DEFAULT_MENU_WIDTH: f64 = 300.0;

/// Default slide duration
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Open/closed menu with an animated horizontal offset
///
/// The offset is `-width` when closed and `0` when open. Toggling while a slide
/// is running retargets from wherever the panel currently is.
#[derive(Debug, Clone)]
pub struct MenuPanel {
    open: bool,
    width: f64,
    duration: Duration,
    offset: AnimatedValue,
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_WIDTH, DEFAULT_SLIDE_DURATION)
    }
}

impl MenuPanel {
    #[must_use]
    pub fn new(width: f64, duration: Duration) -> Self {
        Self {
            open: false,
            width,
            duration,
            offset: AnimatedValue::new(-width),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current horizontal offset
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset.value()
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.offset.is_animating()
    }

    /// Flip the open state and start sliding toward it; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        let target = if self.open { 0.0 } else { -self.width };
        self.offset
            .animate_to(target, self.duration, Easing::EaseInOutQuad);
        debug!(open = self.open, from = self.offset(), "Menu toggled");
        self.open
    }

    /// Close if open; no-op otherwise
    pub fn close(&mut self) {
        if self.open {
            self.toggle();
        }
    }

    /// Advance the slide
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.offset.tick(dt)
    }

    /// Entries in display order
    #[must_use]
    pub const fn items(&self) -> &'static [MenuItem] {
        &MenuItem::ALL
    }
}
