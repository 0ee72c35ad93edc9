//! Foundation elements for swipe-reveal: pointer input, gesture constants
//! and velocity tracking.

pub mod error;
pub mod gesture_constants;
pub mod pointer;
pub mod velocity_tracker;
pub mod view_configuration;

pub use error::ConfigError;
pub use pointer::{HistoricalSample, PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;
pub use view_configuration::ViewConfiguration;

pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::gesture_constants::*;
    pub use crate::pointer::{HistoricalSample, PointerEvent, PointerEventKind, PointerId};
    pub use crate::velocity_tracker::VelocityTracker1D;
    pub use crate::view_configuration::ViewConfiguration;
}
