// File: crates/plot-training/src/main.rs
// Summary: Renders the GAN training-history chart (D loss, D accuracy, G loss) for one dataset id to PNG.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use training_chart::{ChartRenderer, PlotConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot GAN training history curves", long_about = None)]
struct Cli {
    /// Dataset id used in the input and output file names [default: 361024]
    dsid: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = PlotConfig::with_dsid(cli.dsid);
    let input = config.input_path();
    info!(dsid = %config.dsid, input = %input.display(), "plotting training history");

    let out = ChartRenderer::new(config)
        .run()
        .with_context(|| format!("failed to render training chart from '{}'", input.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
