// File: crates/training-chart/src/legend.rs
// Summary: Legend box placed in normalized pad coordinates, one line-sample row per entry.

use skia_safe as skia;

use crate::curve::LineStyle;
use crate::geometry::RectI32;
use crate::text::{Align, TextShaper};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: LineStyle,
}

/// Legend box. Corners are in pad NDC: `(x1, y1)` bottom-left, `(x2, y2)` top-right.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Text height as a fraction of the pad height.
    pub text_size: f64,
    /// Border stroke width in pixels; 0 draws no border.
    pub border_size: f32,
    /// `None` keeps the box transparent.
    pub fill: Option<skia::Color>,
    /// Fraction of the box width reserved for the line sample.
    pub margin: f64,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            text_size: 0.05,
            border_size: 0.0,
            fill: None,
            margin: 0.25,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, label: impl Into<String>, style: LineStyle) -> &mut Self {
        self.entries.push(LegendEntry { label: label.into(), style });
        self
    }

    pub fn n_rows(&self) -> usize { self.entries.len() }

    /// Grow the box downward so each row gets `row_height` of NDC height.
    pub fn fit_to_rows(&mut self, row_height: f64) {
        self.y1 -= row_height * self.n_rows() as f64;
    }

    pub fn draw(&self, canvas: &skia::Canvas, pad: &RectI32, shaper: &TextShaper, text_color: skia::Color, draw_labels: bool) {
        let (left, bottom) = pad.ndc_to_px(self.x1, self.y1);
        let (right, top) = pad.ndc_to_px(self.x2, self.y2);
        let rect = skia::Rect::from_ltrb(left, top.min(bottom), right, top.max(bottom));

        if let Some(fill) = self.fill {
            let mut paint = skia::Paint::default();
            paint.set_color(fill);
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_rect(rect, &paint);
        }
        if self.border_size > 0.0 {
            let mut paint = skia::Paint::default();
            paint.set_color(text_color);
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(self.border_size);
            canvas.draw_rect(rect, &paint);
        }

        let n = self.n_rows();
        if n == 0 {
            return;
        }
        let row_h = rect.height() / n as f32;
        let sample_w = rect.width() * self.margin as f32;
        let size = (self.text_size * pad.height() as f64) as f32;

        for (i, entry) in self.entries.iter().enumerate() {
            let cy = rect.top + row_h * (i as f32 + 0.5);

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(entry.style.width.max(1.0));
            stroke.set_color(entry.style.color);
            canvas.draw_line((rect.left + sample_w * 0.15, cy), (rect.left + sample_w * 0.85, cy), &stroke);

            if draw_labels {
                shaper.draw(canvas, &entry.label, rect.left + sample_w, cy + size * 0.35, size, text_color, Align::Left);
            }
        }
    }
}
