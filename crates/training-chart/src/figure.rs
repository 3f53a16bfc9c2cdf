// File: crates/training-chart/src/figure.rs
// Summary: Figure of vertically stacked panels and the headless PNG pipeline on Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::panel::Panel;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins applied inside every pad.
    pub insets: Insets,
    pub theme: Theme,
    /// Turn off to skip all text (keeps output independent of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::paper(),
            draw_labels: true,
        }
    }
}

/// Panels stacked top to bottom, each in an equal-height pad.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacked(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface(opts.width, opts.height))?;

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);

            let shaper = TextShaper::new();
            let pads = RectI32::from_ltwh(0, 0, opts.width, opts.height).split_rows(self.panels.len());
            for (i, (panel, pad)) in self.panels.iter().zip(&pads).enumerate() {
                debug!(panel = i, curves = panel.curves.len(), "drawing panel");
                panel.draw(canvas, pad, &opts.insets, &opts.theme, &shaper, opts.draw_labels);
            }
        }

        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        info!(path = %path.display(), bytes = data.len(), "wrote chart");
        Ok(())
    }
}
