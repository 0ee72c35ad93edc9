//! Pure geometry & unit types for swipe-reveal
//!
//! Points, sizes and rectangles used by the gesture arbiter and the
//! layout contract, plus density-independent units for gesture constants.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
