// File: crates/training-chart/src/theme.rs
// Summary: Colour palette and themes for chart rendering.

use skia_safe as skia;

/// Named line colours.
pub mod colors {
    use skia_safe::Color;

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    /// Publication style: white pads, black frame and text.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: colors::WHITE,
            frame: colors::BLACK,
            axis_label: colors::BLACK,
            tick_label: colors::BLACK,
            legend_text: colors::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::paper() }
}
