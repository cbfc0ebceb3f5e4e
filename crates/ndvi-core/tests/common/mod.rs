#![allow(dead_code)]

use ndarray::Array2;
use ndvi_core::config::{AmbientTintConfig, EngineConfig, TintColor};
use ndvi_core::engine::HeatmapEngine;
use ndvi_core::grid::NdviGrid;
use ndvi_core::viewport::CanvasSize;

/// The 2x2 grid used by the end-to-end scenarios.
pub fn scenario_grid() -> NdviGrid {
    NdviGrid::from_rows(vec![vec![0.0, 0.5], vec![0.75, 1.0]]).expect("valid grid")
}

/// 4x4 grid whose top-left quadrant holds 0.40..0.55 while the global
/// extremes (0.0 and 1.0) sit in other quadrants.
pub fn quadrant_grid() -> NdviGrid {
    NdviGrid::from_rows(vec![
        vec![0.40, 0.45, 0.90, 1.00],
        vec![0.50, 0.55, 0.80, 0.85],
        vec![0.00, 0.10, 0.60, 0.65],
        vec![0.20, 0.30, 0.70, 0.75],
    ])
    .expect("valid grid")
}

pub fn uniform_grid(rows: usize, cols: usize, fill: f32) -> NdviGrid {
    NdviGrid::new(Array2::from_elem((rows, cols), fill)).expect("valid grid")
}

/// Grid whose value encodes its own position: `row * cols + col`, scaled to [0, 1).
pub fn ramp_grid(rows: usize, cols: usize) -> NdviGrid {
    let n = (rows * cols) as f32;
    NdviGrid::new(Array2::from_shape_fn((rows, cols), |(r, c)| {
        (r * cols + c) as f32 / n
    }))
    .expect("valid grid")
}

/// Config with the ambient tint switched off so rendered pixels equal the
/// mapped cell colors.
pub fn untinted_config(canvas: CanvasSize) -> EngineConfig {
    let clear = TintColor {
        rgb: [128, 128, 128],
        alpha: 0.0,
    };
    EngineConfig {
        canvas,
        background: [0, 0, 0],
        tint: AmbientTintConfig {
            low: clear,
            high: clear,
        },
        ..Default::default()
    }
}

pub fn engine_with(grid: NdviGrid) -> HeatmapEngine {
    let mut engine = HeatmapEngine::default();
    engine.set_grid(grid);
    engine
}

/// Wheel delta that produces exactly `factor` with the default sensitivity.
pub fn wheel_delta_for(factor: f64) -> f64 {
    -factor.ln() / ndvi_core::consts::DEFAULT_WHEEL_SENSITIVITY
}
