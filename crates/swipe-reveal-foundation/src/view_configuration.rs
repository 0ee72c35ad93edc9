//! Platform gesture configuration.

use swipe_reveal_ui_graphics::Dp;

use crate::error::ConfigError;
use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};

/// Gesture constants for one display.
///
/// Distances and velocities are stored density-independent; the `scaled_*`
/// accessors convert them to the physical pixels pointer events carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: Dp,
    /// dp per second
    pub minimum_fling_velocity: f32,
    /// dp per second
    pub maximum_fling_velocity: f32,
    pub density: f32,
}

impl ViewConfiguration {
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: Dp) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn scaled_touch_slop(&self) -> f32 {
        self.touch_slop.to_px(self.density)
    }

    pub fn scaled_minimum_fling_velocity(&self) -> f32 {
        self.minimum_fling_velocity * self.density
    }

    pub fn scaled_maximum_fling_velocity(&self) -> f32 {
        self.maximum_fling_velocity * self.density
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        let slop = self.touch_slop.0;
        if !slop.is_finite() || slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop(slop));
        }
        let (min, max) = (self.minimum_fling_velocity, self.maximum_fling_velocity);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ConfigError::InvalidFlingVelocity { min, max });
        }
        Ok(())
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            minimum_fling_velocity: MIN_FLING_VELOCITY,
            maximum_fling_velocity: MAX_FLING_VELOCITY,
            density: 1.0,
        }
    }
}
