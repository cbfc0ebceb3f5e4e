use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ndvi_core::io::grid_io::save_csv;
use ndvi_core::synthetic::{generate_field, SyntheticFieldConfig};

#[derive(Args)]
pub struct SynthArgs {
    /// Number of grid rows
    #[arg(long, default_value = "64")]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value = "64")]
    pub cols: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Typical NDVI of the healthy crop
    #[arg(long, default_value = "0.68")]
    pub base: f32,

    /// Number of stressed patches
    #[arg(long, default_value = "3")]
    pub patches: usize,

    /// Output CSV path
    #[arg(short, long, default_value = "field.csv")]
    pub output: PathBuf,
}

pub fn run(args: &SynthArgs) -> Result<()> {
    let config = SyntheticFieldConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        base: args.base,
        stress_patches: args.patches,
        ..Default::default()
    };
    let grid = generate_field(&config).context("Invalid synthetic field parameters")?;

    save_csv(&grid, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "Generated {}x{} field (seed {}) -> {}",
        grid.rows(),
        grid.cols(),
        args.seed,
        args.output.display()
    );
    Ok(())
}
