use ndarray::Array2;

use crate::color::{health_class, HealthClass};
use crate::error::{NdviError, Result};

/// Immutable rows × cols field of vegetation index values.
///
/// Values are conceptually in [-1, 1]; only [0, 1] maps to distinct colors.
/// A grid with zero rows or columns is valid and means "no data yet".
#[derive(Clone, Debug, PartialEq)]
pub struct NdviGrid {
    data: Array2<f32>,
}

impl NdviGrid {
    /// Wrap a row-major array, rejecting NaN and infinite cells.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(NdviError::InvalidValue { row, col, value });
        }
        Ok(Self { data })
    }

    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, 0)),
        }
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();

        let mut flat = Vec::with_capacity(n_rows * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(NdviError::RaggedRows {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            flat.extend(values);
        }

        let data = Array2::from_shape_vec((n_rows, expected), flat)?;
        Self::new(data)
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get([row, col]).copied()
    }

    /// Arithmetic mean of every cell, 0.0 for an empty grid.
    pub fn mean(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        (sum / self.data.len() as f64) as f32
    }

    /// (min, max) over the whole grid, `None` if empty.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Number of cells in each health band, indexed by [`HealthClass::index`].
    pub fn class_histogram(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for &v in self.data.iter() {
            counts[health_class(v).index()] += 1;
        }
        counts
    }

    /// Fraction of cells in `class`, 0.0 for an empty grid.
    pub fn class_fraction(&self, class: HealthClass) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.class_histogram()[class.index()] as f32 / self.data.len() as f32
    }
}

impl Default for NdviGrid {
    fn default() -> Self {
        Self::empty()
    }
}
