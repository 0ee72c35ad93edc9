//! Container configuration.

use swipe_reveal_animation::AnimationSpec;
use swipe_reveal_foundation::{ConfigError, ViewConfiguration};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeRevealConfig {
    pub view_configuration: ViewConfiguration,
    /// Duration and easing of snap animations.
    pub scroll_animation: AnimationSpec,
    /// Let a fast release decide open/closed by its direction before the
    /// hysteresis rule is consulted.
    pub fling_settle: bool,
}

impl SwipeRevealConfig {
    pub fn with_view_configuration(mut self, view_configuration: ViewConfiguration) -> Self {
        self.view_configuration = view_configuration;
        self
    }

    pub fn with_scroll_animation(mut self, scroll_animation: AnimationSpec) -> Self {
        self.scroll_animation = scroll_animation;
        self
    }

    pub fn with_fling_settle(mut self, enabled: bool) -> Self {
        self.fling_settle = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view_configuration.validate()?;
        if self.scroll_animation.duration_millis == 0 {
            return Err(ConfigError::InvalidDuration(0));
        }
        Ok(())
    }
}
