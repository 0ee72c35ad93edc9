//! Shared gesture constants for touch handling.
//!
//! Values are in density-independent pixels; `ViewConfiguration` scales
//! them to physical pixels for a given screen density.

use swipe_reveal_ui_graphics::Dp;

/// Distance a pointer must travel before movement counts as a drag.
///
/// Below this the gesture may still be a tap, and neither the reveal
/// container nor its ancestors claim it. Matches the common platform touch
/// slop of ~8dp.
pub const DRAG_THRESHOLD: Dp = Dp(8.0);

/// Slowest release that still counts as a fling, in dp per second.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in dp per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
