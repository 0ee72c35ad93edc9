/// Represents the orientation of a linear container.
///
/// A swipe-reveal container only reveals along the horizontal axis; a
/// vertical container is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Children laid out left to right.
    #[default]
    Horizontal,

    /// Children laid out top to bottom.
    Vertical,
}

impl Axis {
    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }
}
