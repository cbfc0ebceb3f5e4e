use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::{engine_for, load_grid_file};

#[derive(Args)]
pub struct RenderArgs {
    /// Input grid (CSV or grayscale image)
    pub file: PathBuf,

    /// Zoom factor applied before rendering (1.0 to 8.0)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Zoom anchor in canvas units: "x,y" (default: canvas center)
    #[arg(long)]
    pub at: Option<String>,

    /// Engine config TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "heatmap.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let grid = load_grid_file(&args.file)?;
    let mut engine = engine_for(grid, args.config.as_deref())?;

    if let Some(factor) = args.zoom {
        if !(factor.is_finite() && factor > 0.0) {
            anyhow::bail!("Zoom factor must be positive, got {factor}");
        }
        let canvas = engine.config().canvas;
        let (x, y) = match args.at {
            Some(ref at) => parse_point(at)?,
            None => (canvas.w() / 2.0, canvas.h() / 2.0),
        };
        // Drive the zoom through a wheel event so it follows interactive semantics.
        let delta_y = -factor.ln() / engine.config().wheel_sensitivity;
        engine.wheel(x, y, delta_y, None);
    }

    engine
        .export_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    crate::summary::print_view_summary(&engine);
    println!("Saved to {}", args.output.display());
    Ok(())
}

fn parse_point(s: &str) -> Result<(f64, f64)> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .context("Invalid point format (expected 'x,y')")?;
    if parts.len() != 2 {
        anyhow::bail!("Point requires exactly 2 values: x,y");
    }
    Ok((parts[0], parts[1]))
}
