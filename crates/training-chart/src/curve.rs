// File: crates/training-chart/src/curve.rs
// Summary: Curve model (named per-epoch XY samples) and line styling.

use skia_safe as skia;

use crate::theme::colors;

/// A named ordered series of `(x, y)` samples, one per training epoch.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    /// Build from y values alone; x runs over epoch indices `0..n`.
    pub fn from_values(name: impl Into<String>, ys: &[f64]) -> Self {
        let points = ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
        Self::new(name, points)
    }

    /// Number of samples.
    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Largest y value. NaN samples are ignored, so an empty or all-NaN curve gives `None`.
    pub fn max_y(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| !y.is_nan())
            .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |m| m.max(y))))
    }
}

/// Stroke style for a curve and its legend icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
}

impl LineStyle {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn with_color(color: skia::Color) -> Self {
        Self { color, ..Self::default() }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: colors::BLACK, width: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_y_scans_all_samples() {
        let c = Curve::from_values("g_loss_mean", &[0.7, 2.5, 1.1]);
        assert_eq!(c.max_y(), Some(2.5));
        assert_eq!(c.len(), 3);
        assert_eq!(c.points[2], (2.0, 1.1));
    }

    #[test]
    fn max_y_of_empty_is_none() {
        assert_eq!(Curve::new("x", Vec::new()).max_y(), None);
    }

    #[test]
    fn max_y_skips_nan() {
        let c = Curve::from_values("x", &[f64::NAN, 0.3]);
        assert_eq!(c.max_y(), Some(0.3));
    }

    #[test]
    fn default_style_is_thin_black() {
        let s = LineStyle::default();
        assert_eq!(s.color, colors::BLACK);
        assert_eq!(s.width, 1.0);
        assert_eq!(LineStyle::with_color(colors::RED).width, 1.0);
    }
}
