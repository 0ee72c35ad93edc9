//! Layout contracts for swipe-reveal
//!
//! The host framework owns measurement and placement. This crate only
//! describes what a container asks of its children: orientation and
//! per-child size requests.

mod axis;
mod params;

pub use axis::*;
pub use params::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::params::{ChildView, Dimension, LayoutParams};
}
