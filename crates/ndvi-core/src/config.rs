use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_CELL_OVERLAP, DEFAULT_WHEEL_SENSITIVITY};
use crate::error::{NdviError, Result};
use crate::viewport::CanvasSize;

/// Runtime settings for a [`HeatmapEngine`](crate::engine::HeatmapEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// `k` in the wheel zoom factor `exp(-delta_y * k)`.
    pub wheel_sensitivity: f64,
    /// Seam overlap added to every cell rectangle, in logical units.
    pub cell_overlap: f64,
    /// Clear color behind the grid.
    pub background: [u8; 3],
    /// Logical canvas resolution; the rendered surface has exactly this many pixels.
    pub canvas: CanvasSize,
    pub tint: AmbientTintConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            cell_overlap: DEFAULT_CELL_OVERLAP,
            background: DEFAULT_BACKGROUND,
            canvas: CanvasSize::default(),
            tint: AmbientTintConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(NdviError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(NdviError::InvalidConfig(format!(
                "wheel_sensitivity must be positive, got {}",
                self.wheel_sensitivity
            )));
        }
        if !self.cell_overlap.is_finite() || self.cell_overlap < 0.0 {
            return Err(NdviError::InvalidConfig(format!(
                "cell_overlap must be non-negative, got {}",
                self.cell_overlap
            )));
        }
        for (name, tint) in [("low", &self.tint.low), ("high", &self.tint.high)] {
            if !(0.0..=1.0).contains(&tint.alpha) {
                return Err(NdviError::InvalidConfig(format!(
                    "tint.{name}.alpha must be within [0, 1], got {}",
                    tint.alpha
                )));
            }
        }
        Ok(())
    }
}

/// Endpoints of the ambient lighting overlay.
///
/// `low` is applied to a grid whose mean NDVI is 0 (bare, sun-baked field),
/// `high` to a grid whose mean is 1 (dense canopy). Intermediate means
/// interpolate color and alpha linearly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientTintConfig {
    pub low: TintColor,
    pub high: TintColor,
}

impl Default for AmbientTintConfig {
    fn default() -> Self {
        Self {
            low: TintColor {
                rgb: [255, 214, 153],
                alpha: 0.20,
            },
            high: TintColor {
                rgb: [22, 101, 52],
                alpha: 0.30,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TintColor {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl TintColor {
    /// Linear blend toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &TintColor, t: f32) -> TintColor {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        TintColor {
            rgb: [
                mix(self.rgb[0], other.rgb[0]),
                mix(self.rgb[1], other.rgb[1]),
                mix(self.rgb[2], other.rgb[2]),
            ],
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }
}
