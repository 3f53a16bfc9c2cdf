// File: crates/training-chart/src/history.rs
// Summary: Training history file: named per-epoch curves loaded from JSON or long-format CSV.
// Notes:
// - JSON layout: `{ "<curve>": [[x, y], ...], ... }`.
// - CSV layout: header `curve,x,y`, one row per sample, samples in file order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::curve::Curve;
use crate::error::{ChartError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingHistory {
    curves: BTreeMap<String, Curve>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    curve: String,
    x: f64,
    y: f64,
}

impl TrainingHistory {
    pub fn from_curves(curves: impl IntoIterator<Item = Curve>) -> Self {
        Self { curves: curves.into_iter().map(|c| (c.name.clone(), c)).collect() }
    }

    /// Open a history file, trying the `.json`/`.csv` sibling when `path` is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = resolve_path(path.as_ref())?;
        let history = match extension(&path).as_deref() {
            Some("json") => Self::read_json(&path)?,
            Some("csv") => Self::read_csv(&path)?,
            _ => return Err(ChartError::UnsupportedFormat(path)),
        };
        info!(path = %path.display(), curves = history.len(), "loaded training history");
        Ok(history)
    }

    fn read_json(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let raw: BTreeMap<String, Vec<(f64, f64)>> = serde_json::from_reader(reader)?;
        Ok(Self::from_curves(raw.into_iter().map(|(name, points)| Curve::new(name, points))))
    }

    fn read_csv(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        let mut curves: BTreeMap<String, Curve> = BTreeMap::new();
        for row in rdr.deserialize() {
            let row: CsvRow = row?;
            curves
                .entry(row.curve.clone())
                .or_insert_with(|| Curve::new(row.curve, Vec::new()))
                .points
                .push((row.x, row.y));
        }
        Ok(Self { curves })
    }

    /// Write as JSON in the layout `open` reads.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw: BTreeMap<&str, &[(f64, f64)]> =
            self.curves.iter().map(|(k, c)| (k.as_str(), c.points.as_slice())).collect();
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, &raw)?;
        Ok(())
    }

    /// Look up a curve by name.
    pub fn curve(&self, name: &str) -> Result<&Curve> {
        let c = self.curves.get(name).ok_or_else(|| ChartError::MissingCurve(name.to_string()))?;
        debug!(curve = name, samples = c.len(), "fetched curve");
        Ok(c)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.curves.len() }

    pub fn is_empty(&self) -> bool { self.curves.is_empty() }
}

fn extension(p: &Path) -> Option<String> {
    p.extension().map(|e| e.to_string_lossy().to_lowercase())
}

/// Resolve path, trying the .json/.csv swap if needed.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            debug!(requested = %p.display(), using = %alt.display(), "input extension swapped");
            return Ok(alt);
        }
    }
    Err(ChartError::InputNotFound(p.to_path_buf()))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    match extension(p)?.as_str() {
        "json" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("json");
            Some(alt)
        }
        _ => None,
    }
}
