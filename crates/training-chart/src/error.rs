// File: crates/training-chart/src/error.rs
// Summary: Error taxonomy for loading training histories and rendering charts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("curve '{0}' not found in training history")]
    MissingCurve(String),

    #[error("curve '{0}' has no finite samples")]
    EmptyCurve(String),

    #[error("unsupported input format: {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
