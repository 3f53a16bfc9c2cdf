// File: crates/training-chart/src/lib.rs
// Summary: Core library entry point; exports the training-history loader, chart model and renderer.

pub mod axis;
pub mod curve;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod history;
pub mod legend;
pub mod panel;
pub mod renderer;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use curve::{Curve, LineStyle};
pub use error::{ChartError, Result};
pub use figure::{Figure, RenderOptions};
pub use history::TrainingHistory;
pub use legend::Legend;
pub use panel::Panel;
pub use renderer::{ChartRenderer, FrameBounds, PlotConfig};
pub use theme::Theme;
