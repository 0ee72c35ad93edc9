//! Animation primitives for swipe-reveal
//!
//! Provides the easing curves, the frame time sources and the `Scroller`
//! that interpolates a horizontal offset between two positions over time.

mod clock;
mod easing;
mod scroller;

pub use clock::*;
pub use easing::*;
pub use scroller::*;

pub mod prelude {
    pub use crate::clock::{FrameTimeSource, ManualClock, MonotonicClock};
    pub use crate::easing::{AnimationSpec, Easing};
    pub use crate::scroller::{ScrollSession, Scroller};
}
