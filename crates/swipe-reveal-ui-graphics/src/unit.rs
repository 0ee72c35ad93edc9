//! Density-independent units.

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// Physical pixels at `density`.
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}
