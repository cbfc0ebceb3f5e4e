use serde::Serialize;

use crate::grid::NdviGrid;
use crate::viewport::{CanvasSize, ViewportState};

/// Min/max over the cells currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewportStats {
    pub min: f32,
    pub max: f32,
}

/// Inclusive block of grid indices: columns `x_start..=x_end`, rows
/// `y_start..=y_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellRange {
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
}

impl CellRange {
    pub fn width(&self) -> usize {
        self.x_end - self.x_start + 1
    }

    pub fn height(&self) -> usize {
        self.y_end - self.y_start + 1
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }
}

/// Cells intersecting the canvas under `state`, by closed-form inversion of
/// the transform. `None` for an empty grid or a degenerate range.
///
/// A cell whose edge only touches the viewport boundary is not counted.
pub fn visible_cell_range(
    rows: usize,
    cols: usize,
    state: &ViewportState,
    canvas: CanvasSize,
) -> Option<CellRange> {
    if rows == 0 || cols == 0 || canvas.width == 0 || canvas.height == 0 {
        return None;
    }
    let (cell_w, cell_h) = canvas.cell_size(rows, cols);
    let scale = state.scale();

    let left = -state.translate_x() / scale;
    let top = -state.translate_y() / scale;
    let right = (canvas.w() - state.translate_x()) / scale;
    let bottom = (canvas.h() - state.translate_y()) / scale;

    let x_start = index_floor(left / cell_w, cols);
    let y_start = index_floor(top / cell_h, rows);
    let x_end = index_ceil_exclusive(right / cell_w, cols)?;
    let y_end = index_ceil_exclusive(bottom / cell_h, rows)?;

    if x_start > x_end || y_start > y_end {
        return None;
    }
    Some(CellRange {
        x_start,
        x_end,
        y_start,
        y_end,
    })
}

/// Positions this close to a cell edge are treated as on the edge, so
/// rounding noise in the transform never adds a sliver column or row.
const EDGE_EPSILON: f64 = 1e-9;

fn index_floor(pos: f64, count: usize) -> usize {
    let pos = pos + EDGE_EPSILON;
    if pos.is_nan() || pos <= 0.0 {
        return 0;
    }
    (pos.floor() as usize).min(count - 1)
}

/// Last index strictly before the edge at `pos`.
fn index_ceil_exclusive(pos: f64, count: usize) -> Option<usize> {
    let pos = pos - EDGE_EPSILON;
    if pos.is_nan() || pos <= 0.0 {
        return None;
    }
    Some((pos.ceil() as usize).saturating_sub(1).min(count - 1))
}

/// Min/max over only the visible sub-rectangle of `grid`.
///
/// Returns `{0, 0}` for an empty grid or when nothing is visible.
pub fn compute_visible_stats(grid: &NdviGrid, state: &ViewportState, canvas: CanvasSize) -> ViewportStats {
    let Some(range) = visible_cell_range(grid.rows(), grid.cols(), state, canvas) else {
        return ViewportStats::default();
    };

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let data = grid.data();
    for row in range.y_start..=range.y_end {
        for col in range.x_start..=range.x_end {
            let v = data[[row, col]];
            min = min.min(v);
            max = max.max(v);
        }
    }
    ViewportStats { min, max }
}
