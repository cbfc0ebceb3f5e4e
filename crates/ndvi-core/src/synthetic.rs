use std::f32::consts::PI;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{NDVI_MAX, NDVI_MIN};
use crate::error::{NdviError, Result};
use crate::grid::NdviGrid;

/// Parameters for a generated field, used when no satellite raster exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticFieldConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    /// Typical NDVI of the healthy part of the field.
    pub base: f32,
    /// Amplitude of the broad row-direction variation.
    pub undulation: f32,
    /// Number of circular stressed patches.
    pub stress_patches: usize,
    /// Per-cell noise amplitude.
    pub noise: f32,
}

impl Default for SyntheticFieldConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            seed: 42,
            base: 0.68,
            undulation: 0.12,
            stress_patches: 3,
            noise: 0.04,
        }
    }
}

impl SyntheticFieldConfig {
    /// Reject parameters that would produce non-finite cells.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("base", self.base),
            ("undulation", self.undulation),
            ("noise", self.noise),
        ] {
            if !value.is_finite() {
                return Err(NdviError::InvalidConfig(format!(
                    "synthetic {name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

struct Patch {
    row: f32,
    col: f32,
    radius: f32,
    depth: f32,
}

/// Generate a plausible crop field: a healthy base level with gentle
/// undulation, a few stressed circular patches, and cell noise.
///
/// The same config always yields the same grid. Values stay within [-1, 1].
pub fn generate_field(config: &SyntheticFieldConfig) -> Result<NdviGrid> {
    config.validate()?;
    let (rows, cols) = (config.rows, config.cols);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let patches: Vec<Patch> = (0..config.stress_patches)
        .map(|_| Patch {
            row: rng.gen::<f32>() * rows as f32,
            col: rng.gen::<f32>() * cols as f32,
            radius: rng.gen_range(0.08..0.20) * rows.max(cols) as f32,
            depth: rng.gen_range(0.25..0.60),
        })
        .collect();
    let phase = rng.gen_range(0.0..2.0 * PI);

    let mut data = Array2::<f32>::zeros((rows, cols));
    for ((row, col), cell) in data.indexed_iter_mut() {
        let r = row as f32;
        let c = col as f32;
        let wave = (r / rows.max(1) as f32 * 2.0 * PI + phase).sin()
            * (c / cols.max(1) as f32 * PI).cos();

        let stress: f32 = patches
            .iter()
            .map(|p| {
                let d2 = (r - p.row).powi(2) + (c - p.col).powi(2);
                p.depth * (-d2 / (2.0 * p.radius * p.radius)).exp()
            })
            .sum();

        let noise = rng.gen_range(-1.0f32..1.0) * config.noise;
        *cell = (config.base + config.undulation * wave - stress + noise).clamp(NDVI_MIN, NDVI_MAX);
    }

    debug!(rows, cols, seed = config.seed, "Generated synthetic field");
    NdviGrid::new(data)
}
