// File: crates/training-chart/src/renderer.rs
// Summary: GAN training chart: loads the discriminator/generator curves for one dataset id
//          and renders the three stacked panels (D loss, D accuracy, G loss) to a PNG.

use std::path::PathBuf;

use tracing::info;

use crate::axis::Axis;
use crate::curve::LineStyle;
use crate::error::{ChartError, Result};
use crate::figure::{Figure, RenderOptions};
use crate::history::TrainingHistory;
use crate::legend::Legend;
use crate::panel::Panel;
use crate::theme::colors;

pub const DEFAULT_DSID: &str = "361024";
pub const DEFAULT_PRESELECTION: &str = "incl";

/// Fixed upper bound of the discriminator loss and accuracy frames.
pub const FIXED_Y_MAX: f64 = 1.3;
/// Headroom factor applied to the generator loss maximum.
pub const HEADROOM: f64 = 1.3;
/// Legend row height in pad NDC.
const LEGEND_ROW: f64 = 0.05;

/// Path template pieces. Only `dsid` is meant to vary between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    pub dsid: String,
    pub preselection: String,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dsid: DEFAULT_DSID.to_string(),
            preselection: DEFAULT_PRESELECTION.to_string(),
            input_dir: PathBuf::from("GAN"),
            output_dir: PathBuf::from("img"),
            extension: "json".to_string(),
        }
    }
}

impl PlotConfig {
    /// Defaults with `dsid` replaced when one is given.
    pub fn with_dsid(dsid: Option<impl Into<String>>) -> Self {
        let mut cfg = Self::default();
        if let Some(id) = dsid {
            cfg.dsid = id.into();
        }
        cfg
    }

    /// `<input_dir>/training_history.<dsid>.rnn.GAN.<preselection>.nominal.<ext>`
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(format!(
            "training_history.{}.rnn.GAN.{}.nominal.{}",
            self.dsid, self.preselection, self.extension
        ))
    }

    /// `<output_dir>/training_<dsid>.png`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("training_{}.png", self.dsid))
    }
}

/// Axis extents shared by the three frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBounds {
    /// Sample count of `d_loss_orig`; every frame spans `[0, n_epochs]` on x.
    pub n_epochs: usize,
    pub d_loss_max: f64,
    pub d_acc_max: f64,
    pub g_loss_max: f64,
}

/// One overlaid curve: history name, style, legend label.
struct Overlay {
    name: &'static str,
    style: LineStyle,
    label: &'static str,
}

impl Overlay {
    fn new(name: &'static str, style: LineStyle, label: &'static str) -> Self {
        Self { name, style, label }
    }
}

pub struct ChartRenderer {
    config: PlotConfig,
    options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config, options: RenderOptions::default() }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn load(&self) -> Result<TrainingHistory> {
        TrainingHistory::open(self.config.input_path())
    }

    pub fn frame_bounds(history: &TrainingHistory) -> Result<FrameBounds> {
        let n_epochs = history.curve("d_loss_orig")?.len();
        let g_mean = history.curve("g_loss_mean")?;
        let g_max = g_mean.max_y().ok_or_else(|| ChartError::EmptyCurve(g_mean.name.clone()))?;
        Ok(FrameBounds {
            n_epochs,
            d_loss_max: FIXED_Y_MAX,
            d_acc_max: FIXED_Y_MAX,
            g_loss_max: HEADROOM * g_max,
        })
    }

    /// Assemble the three panels. Fails on the first missing curve; nothing is drawn here.
    pub fn build_figure(history: &TrainingHistory) -> Result<Figure> {
        let b = Self::frame_bounds(history)?;
        let red = LineStyle::with_color(colors::RED);
        let blue = LineStyle::with_color(colors::BLUE);
        let plain = LineStyle::default();

        // (draw order, legend order) per panel
        let d_loss = (
            vec![
                Overlay::new("d_loss_f_orig", red, "Fake loss"),
                Overlay::new("d_loss_r_orig", blue, "Real loss"),
                Overlay::new("d_loss_orig", plain, "Average loss"),
            ],
            [2, 1, 0],
        );
        let d_acc = (
            vec![
                Overlay::new("d_acc_f_orig", red, "Fake acc"),
                Overlay::new("d_acc_r_orig", blue, "Real acc"),
                Overlay::new("d_acc_orig", plain, "Average acc"),
            ],
            [2, 1, 0],
        );
        let g_loss = (
            vec![
                Overlay::new("g_loss_orig", red, "Original loss"),
                Overlay::new("g_loss_flip", blue, "Flipped loss"),
                Overlay::new("g_loss_mean", plain, "Average loss"),
            ],
            [2, 0, 1],
        );

        let frames = [
            ("Discriminator Loss", b.d_loss_max, d_loss),
            ("Discriminator Accuracy", b.d_acc_max, d_acc),
            ("Generator Loss", b.g_loss_max, g_loss),
        ];

        let mut panels = Vec::with_capacity(frames.len());
        for (title, y_max, (overlays, legend_order)) in frames {
            let mut panel = Panel::new(Axis::epochs(b.n_epochs), Axis::new(title, 0.0, y_max));
            for o in &overlays {
                panel.add_curve(history.curve(o.name)?.clone(), o.style);
            }
            let mut legend = Legend::new(0.65, 0.90, 0.80, 0.90);
            for i in legend_order {
                legend.add_entry(overlays[i].label, overlays[i].style);
            }
            legend.fit_to_rows(LEGEND_ROW);
            panel.set_legend(legend);
            panels.push(panel);
        }

        info!(
            n_epochs = b.n_epochs,
            g_loss_max = b.g_loss_max,
            "built training chart"
        );
        Ok(Figure::stacked(panels))
    }

    /// Load, build and export. Returns the written image path.
    pub fn run(&self) -> Result<PathBuf> {
        let history = self.load()?;
        let figure = Self::build_figure(&history)?;
        let out = self.config.output_path();
        figure.render_to_png(&self.options, &out)?;
        Ok(out)
    }
}
