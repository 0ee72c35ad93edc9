//! Configuration errors.
//!
//! Gesture handling itself never fails; only building a configuration can.

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Touch slop is negative or not finite.
    InvalidTouchSlop(f32),
    /// Density is not a finite positive number.
    InvalidDensity(f32),
    /// Fling velocity bounds are not finite, negative, or inverted.
    InvalidFlingVelocity { min: f32, max: f32 },
    /// Snap animations need a non-zero duration.
    InvalidDuration(u64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be a finite non-negative distance, got {slop}")
            }
            ConfigError::InvalidDensity(density) => {
                write!(f, "density must be finite and positive, got {density}")
            }
            ConfigError::InvalidFlingVelocity { min, max } => {
                write!(f, "invalid fling velocity range [{min}, {max}]")
            }
            ConfigError::InvalidDuration(millis) => {
                write!(f, "animation duration must be non-zero, got {millis}ms")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
