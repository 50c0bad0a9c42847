//! Flat state index <-> grid cell conversion
//!
//! States are numbered row-major: `s = row * columns + col`.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// `(row, col) = divmod(s, columns)`
pub fn state_to_cell(s: usize, columns: usize) -> (usize, usize) {
    (s / columns, s % columns)
}

pub fn cell_to_state(row: usize, col: usize, columns: usize) -> usize {
    row * columns + col
}

/// Every `(state, row, col)` of a grid, in state order
pub fn cells(rows: usize, columns: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..rows * columns).map(move |s| {
        let (row, col) = state_to_cell(s, columns);
        (s, row, col)
    })
}

/// Values reshaped row-major into the grid's 2D shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueGrid {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl ValueGrid {
    /// Reshape `values` into `rows x columns`
    pub fn reshape(values: &[f64], rows: usize, columns: usize) -> Result<Self, RenderError> {
        if values.len() != rows * columns {
            return Err(RenderError::ShapeMismatch { values: values.len(), cells: rows * columns });
        }
        Ok(Self { rows, columns, values: values.to_vec() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.values.get(cell_to_state(row, col, self.columns)).copied()
    }

    /// Flat row-major values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest finite value, `None` when nothing is finite
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
