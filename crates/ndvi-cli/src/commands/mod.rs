pub mod config;
pub mod info;
pub mod render;
pub mod replay;
pub mod synth;

use std::path::Path;

use anyhow::{Context, Result};
use ndvi_core::config::EngineConfig;
use ndvi_core::engine::HeatmapEngine;
use ndvi_core::grid::NdviGrid;
use ndvi_core::io::grid_io::load_grid;

/// Load an engine config from TOML, or the default when no path is given.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: EngineConfig = toml::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

pub fn load_grid_file(path: &Path) -> Result<NdviGrid> {
    load_grid(path).with_context(|| format!("Failed to load grid {}", path.display()))
}

/// Build an engine with `grid` loaded and the viewport at identity.
pub fn engine_for(grid: NdviGrid, config_path: Option<&Path>) -> Result<HeatmapEngine> {
    let config = load_engine_config(config_path)?;
    let mut engine = HeatmapEngine::new(config).context("Invalid engine config")?;
    engine.set_grid(grid);
    Ok(engine)
}
