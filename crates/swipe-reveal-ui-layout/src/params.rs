//! Per-child size requests and the host-measured child record.

use swipe_reveal_ui_graphics::Rect;

/// Size request along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Fill the space offered by the parent.
    MatchParent,
    /// Size to the child's own content.
    WrapContent,
    /// Fixed size in pixels.
    Exact(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Same height request, width forced to fill the parent.
    pub fn fill_width(self) -> Self {
        Self {
            width: Dimension::MatchParent,
            ..self
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(Dimension::WrapContent, Dimension::WrapContent)
    }
}

/// A child as seen by its container: requested params plus whatever the
/// host's layout pass measured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildView {
    pub layout_params: Option<LayoutParams>,
    pub measured_width: Option<i32>,
    /// Bounds in container coordinates, before any content scroll.
    pub bounds: Option<Rect>,
}

impl ChildView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = Some(params);
        self
    }

    pub fn with_measured_width(mut self, width: i32) -> Self {
        self.measured_width = Some(width);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Measured width, or 0 before the first layout pass.
    pub fn width(&self) -> i32 {
        self.measured_width.unwrap_or(0).max(0)
    }
}
