use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::load_grid_file;

#[derive(Args)]
pub struct InfoArgs {
    /// Input grid (CSV or grayscale image)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let grid = load_grid_file(&args.file)?;
    crate::summary::print_grid_summary(&grid, &args.file);
    Ok(())
}
