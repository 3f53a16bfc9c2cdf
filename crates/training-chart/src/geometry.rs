// File: crates/training-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and pad layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`. Never inverts: a degenerate result collapses to zero size.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal rows from top to bottom. The last row absorbs the remainder.
    pub fn split_rows(&self, n: usize) -> Vec<RectI32> {
        if n == 0 {
            return Vec::new();
        }
        let h = self.height() / n as i32;
        (0..n)
            .map(|i| {
                let top = self.top + h * i as i32;
                let bottom = if i + 1 == n { self.bottom } else { top + h };
                Self::from_ltrb(self.left, top, self.right, bottom)
            })
            .collect()
    }

    /// Map normalized coordinates (0,0 bottom-left .. 1,1 top-right) to pixels.
    pub fn ndc_to_px(&self, nx: f64, ny: f64) -> (f32, f32) {
        let x = self.left as f64 + nx * self.width() as f64;
        let y = self.bottom as f64 - ny * self.height() as f64;
        (x as f32, y as f32)
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
