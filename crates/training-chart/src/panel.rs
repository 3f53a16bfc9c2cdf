// File: crates/training-chart/src/panel.rs
// Summary: One subplot: axis frame, overlaid line curves, legend, and axes redrawn on top.

use skia_safe as skia;

use crate::axis::Axis;
use crate::curve::{Curve, LineStyle};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::legend::Legend;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::Insets;

/// Target number of major ticks per axis.
const MAJOR_TICKS: usize = 8;
/// Axis title and tick label height as a fraction of the pad height.
const LABEL_SIZE: f64 = 0.05;
/// Major tick length as a fraction of the plot extent across the axis.
const TICK_LENGTH: f32 = 0.03;

#[derive(Clone, Debug)]
pub struct PanelCurve {
    pub curve: Curve,
    pub style: LineStyle,
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Drawn in order, so later curves sit on top.
    pub curves: Vec<PanelCurve>,
    pub legend: Option<Legend>,
}

impl Panel {
    pub fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self { x_axis, y_axis, curves: Vec::new(), legend: None }
    }

    pub fn add_curve(&mut self, curve: Curve, style: LineStyle) {
        self.curves.push(PanelCurve { curve, style });
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Draw the panel into `pad`, a pixel region of the figure canvas.
    pub fn draw(&self, canvas: &skia::Canvas, pad: &RectI32, insets: &Insets, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
        let plot = pad.inset(insets);

        draw_frame(canvas, &plot, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for pc in &self.curves {
            draw_line_curve(canvas, &plot, &self.x_axis, &self.y_axis, pc);
        }
        canvas.restore();

        if let Some(legend) = &self.legend {
            legend.draw(canvas, pad, shaper, theme.legend_text, draw_labels);
        }

        // curves may cover the frame edges, so axes go on last
        draw_frame(canvas, &plot, theme);
        draw_ticks(canvas, &plot, &self.x_axis, &self.y_axis, theme);
        if draw_labels {
            draw_labels_for(canvas, pad, &plot, insets, &self.x_axis, &self.y_axis, theme, shaper);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    canvas.draw_rect(plot.to_skia(), &paint);
}

/// Inward ticks on all four sides of the frame.
fn draw_ticks(canvas: &skia::Canvas, plot: &RectI32, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let x_len = (b - t) * TICK_LENGTH;
    let y_len = (r - l) * TICK_LENGTH;

    for v in nice_ticks(x.min, x.max, MAJOR_TICKS) {
        let px = x.to_px(v, l, r);
        canvas.draw_line((px, b), (px, b - x_len), &paint);
        canvas.draw_line((px, t), (px, t + x_len), &paint);
    }
    for v in nice_ticks(y.min, y.max, MAJOR_TICKS) {
        let py = y.to_px(v, b, t);
        canvas.draw_line((l, py), (l + y_len, py), &paint);
        canvas.draw_line((r, py), (r - y_len, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels_for(
    canvas: &skia::Canvas,
    pad: &RectI32,
    plot: &RectI32,
    insets: &Insets,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let size = (LABEL_SIZE * pad.height() as f64) as f32;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let x_step = nice_step((x.max - x.min) / MAJOR_TICKS as f64);
    for v in nice_ticks(x.min, x.max, MAJOR_TICKS) {
        let px = x.to_px(v, l, r);
        shaper.draw(canvas, &format_tick(v, x_step), px, b + size + 4.0, size, theme.tick_label, Align::Center);
    }
    let y_step = nice_step((y.max - y.min) / MAJOR_TICKS as f64);
    for v in nice_ticks(y.min, y.max, MAJOR_TICKS) {
        let py = y.to_px(v, b, t);
        shaper.draw(canvas, &format_tick(v, y_step), l - 8.0, py + size * 0.35, size, theme.tick_label, Align::Right);
    }

    // Titles hug the far ends of their axes.
    let x_title_y = b + insets.bottom as f32 * 0.85;
    shaper.draw(canvas, &x.label, r, x_title_y, size, theme.axis_label, Align::Right);
    let y_title_x = pad.left as f32 + size * 1.1;
    shaper.draw_vertical(canvas, &y.label, y_title_x, t, size, theme.axis_label, Align::Right);
}

fn draw_line_curve(canvas: &skia::Canvas, plot: &RectI32, x_axis: &Axis, y_axis: &Axis, pc: &PanelCurve) {
    let data = &pc.curve.points;
    if data.len() < 2 {
        return;
    }

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let sx = |v: f64| x_axis.to_px(v, l, r);
    let sy = |v: f64| y_axis.to_px(v, b, t);

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(x0), sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(pc.style.width);
    stroke.set_color(pc.style.color);

    canvas.draw_path(&path, &stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;

    #[test]
    fn curves_keep_draw_order() {
        let mut p = Panel::new(Axis::epochs(3), Axis::new("Loss", 0.0, 1.3));
        p.add_curve(Curve::from_values("f", &[0.1, 0.2, 0.3]), LineStyle::with_color(colors::RED));
        p.add_curve(Curve::from_values("r", &[0.3, 0.2, 0.1]), LineStyle::with_color(colors::BLUE));
        let names: Vec<_> = p.curves.iter().map(|c| c.curve.name.as_str()).collect();
        assert_eq!(names, ["f", "r"]);
        assert!(p.legend.is_none());
    }
}
