use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use crate::consts::{NDVI_MAX, NDVI_MIN};
use crate::error::{NdviError, Result};
use crate::grid::NdviGrid;

/// Parse comma-, semicolon- or whitespace-separated rows of NDVI values.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_csv(text: &str) -> Result<NdviGrid> {
    let mut rows: Vec<Vec<f32>> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = trimmed
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f32>().map_err(|e| NdviError::Parse {
                    line: i + 1,
                    message: format!("'{s}': {e}"),
                })
            })
            .collect::<Result<Vec<f32>>>()?;
        rows.push(row);
    }

    NdviGrid::from_rows(rows)
}

pub fn load_csv(path: &Path) -> Result<NdviGrid> {
    let text = std::fs::read_to_string(path)?;
    let grid = parse_csv(&text)?;
    debug!(rows = grid.rows(), cols = grid.cols(), input = %path.display(), "Loaded CSV grid");
    Ok(grid)
}

/// Serialize a grid as comma-separated rows.
pub fn to_csv(grid: &NdviGrid) -> String {
    let mut out = String::with_capacity(grid.rows() * grid.cols() * 8);
    for row in grid.data().rows() {
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&format!("{v:.4}"));
        }
        out.push('\n');
    }
    out
}

pub fn save_csv(grid: &NdviGrid, path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(grid))?;
    Ok(())
}

/// Load a grayscale raster as a grid, mapping luminance [0, 1] linearly
/// onto NDVI [-1, 1].
pub fn load_image_grid(path: &Path) -> Result<NdviGrid> {
    let img = image::open(path)?;
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();

    let span = NDVI_MAX - NDVI_MIN;
    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        let lum = gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0;
        NDVI_MIN + lum * span
    });

    debug!(rows = h, cols = w, input = %path.display(), "Loaded raster grid");
    NdviGrid::new(data)
}

/// Load a grid, choosing the format from the file extension.
pub fn load_grid(path: &Path) -> Result<NdviGrid> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv" | "txt" | "tsv") => load_csv(path),
        _ => load_image_grid(path),
    }
}
