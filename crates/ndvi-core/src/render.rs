use image::{Rgb, RgbImage};
use rayon::prelude::*;
use tracing::debug;

use crate::color::map_value_to_color;
use crate::config::{AmbientTintConfig, EngineConfig, TintColor};
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::grid::NdviGrid;
use crate::viewport::{CanvasSize, ViewportState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    /// Degenerate grid; the canvas was left untouched.
    Skipped,
}

/// Rasterizes an [`NdviGrid`] under a [`ViewportState`] into an RGB canvas.
///
/// Cells are resolved nearest-neighbor (no smoothing). Each cell rectangle is
/// `cell + overlap` wide and tall, painted in row-major order, so a pixel
/// inside an overlap strip belongs to the later cell, and the strip past the
/// last row/column belongs to that last row/column.
#[derive(Clone, Debug)]
pub struct GridRenderer {
    canvas: CanvasSize,
    cell_overlap: f64,
    background: Rgb<u8>,
    tint: AmbientTintConfig,
}

impl GridRenderer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            canvas: config.canvas,
            cell_overlap: config.cell_overlap,
            background: Rgb(config.background),
            tint: config.tint.clone(),
        }
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    /// A canvas of the configured size cleared to the background color.
    pub fn blank_canvas(&self) -> RgbImage {
        RgbImage::from_pixel(self.canvas.width, self.canvas.height, self.background)
    }

    /// Draw `grid` into `canvas` and apply the ambient tint.
    ///
    /// A canvas of the wrong size is reallocated first.
    pub fn render(&self, grid: &NdviGrid, state: &ViewportState, canvas: &mut RgbImage) -> RenderOutcome {
        if grid.is_empty() || self.canvas.width == 0 || self.canvas.height == 0 {
            return RenderOutcome::Skipped;
        }
        if canvas.dimensions() != (self.canvas.width, self.canvas.height) {
            *canvas = self.blank_canvas();
        }

        let rows = grid.rows();
        let cols = grid.cols();
        let (cell_w, cell_h) = self.canvas.cell_size(rows, cols);

        let colors: Vec<Rgb<u8>> = grid.data().iter().map(|&v| map_value_to_color(v)).collect();

        let col_lookup: Vec<Option<usize>> = (0..self.canvas.width)
            .map(|px| {
                let u = (px as f64 + 0.5 - state.translate_x()) / state.scale();
                resolve_cell(u, cell_w, cols, self.cell_overlap)
            })
            .collect();

        let width = self.canvas.width as usize;
        let background = self.background;
        let fill_row = |(py, row_buf): (usize, &mut [u8])| {
            let v = (py as f64 + 0.5 - state.translate_y()) / state.scale();
            let row = resolve_cell(v, cell_h, rows, self.cell_overlap);
            for (px, pixel) in row_buf.chunks_exact_mut(3).enumerate() {
                let color = match (row, col_lookup[px]) {
                    (Some(r), Some(c)) => colors[r * cols + c],
                    _ => background,
                };
                pixel.copy_from_slice(&color.0);
            }
        };

        let buf: &mut [u8] = &mut **canvas;
        let stride = width * 3;
        if width * self.canvas.height as usize >= PARALLEL_PIXEL_THRESHOLD {
            buf.par_chunks_exact_mut(stride).enumerate().for_each(fill_row);
        } else {
            buf.chunks_exact_mut(stride).enumerate().for_each(fill_row);
        }

        let mean = grid.mean();
        apply_ambient_tint(canvas, &self.tint, mean);

        debug!(
            rows,
            cols,
            scale = state.scale(),
            tx = state.translate_x(),
            ty = state.translate_y(),
            mean,
            "Rendered grid"
        );
        RenderOutcome::Drawn
    }
}

/// Index of the last-painted cell covering content coordinate `pos`.
fn resolve_cell(pos: f64, cell: f64, count: usize, overlap: f64) -> Option<usize> {
    if pos.is_nan() || pos < 0.0 {
        return None;
    }
    let idx = (pos / cell).floor() as usize;
    if idx < count {
        Some(idx)
    } else if pos < count as f64 * cell + overlap {
        Some(count - 1)
    } else {
        None
    }
}

/// Interpolated tint for a grid whose mean NDVI is `mean`.
pub fn ambient_tint(tint: &AmbientTintConfig, mean: f32) -> TintColor {
    tint.low.lerp(&tint.high, mean)
}

/// Overlay-blend `tint` over every pixel of `canvas`, in screen space.
pub fn apply_ambient_tint(canvas: &mut RgbImage, tint: &AmbientTintConfig, mean: f32) {
    let tint = ambient_tint(tint, mean);

    let mut lut = [[0u8; 256]; 3];
    for (ch, table) in lut.iter_mut().enumerate() {
        for (base, out) in table.iter_mut().enumerate() {
            *out = overlay_blend(base as u8, tint.rgb[ch], tint.alpha);
        }
    }

    for pixel in canvas.pixels_mut() {
        for ch in 0..3 {
            pixel.0[ch] = lut[ch][pixel.0[ch] as usize];
        }
    }
}

/// Overlay compositing of one channel, mixed with the base by `alpha`.
///
/// Dark bases are multiplied by the blend color, light bases screened.
pub fn overlay_blend(base: u8, blend: u8, alpha: f32) -> u8 {
    let b = base as f32 / 255.0;
    let s = blend as f32 / 255.0;
    let overlaid = if b < 0.5 {
        2.0 * b * s
    } else {
        1.0 - 2.0 * (1.0 - b) * (1.0 - s)
    };
    let mixed = b + (overlaid - b) * alpha.clamp(0.0, 1.0);
    (mixed * 255.0).round().clamp(0.0, 255.0) as u8
}
