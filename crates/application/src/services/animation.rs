//! Time-based animation driver
//!
//! A scalar that moves toward a target over a fixed duration. Screens own
//! their animated values and advance them explicitly with [`AnimatedValue::tick`],
//! so tests can step time deterministically.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interpolation curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out
    #[default]
    EaseInOutQuad,
    /// Cubic ease-in-out
    EaseInOutCubic,
}

impl Easing {
    /// Map progress in [0, 1] onto the curve
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            },
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            },
        }
    }
}

/// A value animated toward a target
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    from: f64,
    target: f64,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl AnimatedValue {
    /// A settled value
    #[must_use]
    pub const fn new(initial: f64) -> Self {
        Self {
            value: initial,
            from: initial,
            target: initial,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Start moving toward `target` from wherever the value is now
    ///
    /// Calling this mid-transition retargets without a jump.
    pub fn animate_to(&mut self, target: f64, duration: Duration, easing: Easing) {
        self.from = self.value;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.easing = easing;
        if duration.is_zero() {
            self.value = target;
        }
    }

    /// Advance time and return the new value
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if !self.is_animating() {
            return self.value;
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.value = self.target;
        } else {
            let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
            let eased = self.easing.apply(progress);
            self.value = (self.target - self.from).mul_add(eased, self.from);
        }
        self.value
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Whether a transition is still running
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration && self.value.to_bits() != self.target.to_bits()
    }
}
