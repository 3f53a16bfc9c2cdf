// File: crates/training-chart/src/types.rs
// Summary: Shared types and constants (canvas size, pad margins).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels (three stacked 800x600 pads).
pub const HEIGHT: i32 = 1800;

/// Pad margins, in pixels, between the pad edge and the plot frame.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Margins of an 800x600 pad: 16% left/bottom, 5% right/top.
    fn default() -> Self {
        Self::new(128, 40, 30, 96)
    }
}
