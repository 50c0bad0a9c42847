//! Grid layout description
//!
//! A `GridDescription` is the map of a grid world: one single-character code
//! per cell, stored row-major. Only two codes carry meaning for rendering:
//! `'H'` (hole / hazard) and `'G'` (goal). Every other code is an ordinary,
//! value-bearing cell.

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::utils::index::{cell_to_state, state_to_cell};

/// Cell code for a hazard (hole) cell
pub const HAZARD_CODE: char = 'H';

/// Cell code for the goal cell
pub const GOAL_CODE: char = 'G';

/// Rendering category of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellCategory {
    /// Terminal, non-rewarding
    Hazard,
    /// Terminal, rewarding
    Goal,
    /// Any other code (start, frozen, or unrecognized)
    Ordinary(char),
}

impl CellCategory {
    /// Classify a cell code. Never fails: unknown codes are ordinary.
    pub fn from_code(code: char) -> Self {
        match code {
            HAZARD_CODE => CellCategory::Hazard,
            GOAL_CODE => CellCategory::Goal,
            other => CellCategory::Ordinary(other),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, CellCategory::Ordinary(_))
    }
}

/// Row-major grid of cell codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDescription {
    rows: usize,
    columns: usize,
    codes: Vec<char>,
}

impl GridDescription {
    /// Build from one string per row, e.g. `["SFFF", "FHFH", "FFFH", "HFFG"]`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let parsed: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_char_rows(parsed)
    }

    /// Build from byte rows (the `b"SFFF"` layout used by gym map descriptions)
    pub fn from_byte_rows<B: AsRef<[u8]>>(rows: &[B]) -> Result<Self, GridError> {
        let parsed: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&b| b as char).collect())
            .collect();
        Self::from_char_rows(parsed)
    }

    /// Build from nested rows of codes
    pub fn from_char_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(GridError::Empty);
        }

        let mut codes = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::Ragged { row: i, expected: columns, found: row.len() });
            }
            codes.extend_from_slice(row);
        }

        Ok(Self { rows: rows.len(), columns, codes })
    }

    /// Build from a flat row-major code vector and a column count
    pub fn from_flat(codes: Vec<char>, columns: usize) -> Result<Self, GridError> {
        if codes.is_empty() || columns == 0 {
            return Err(GridError::Empty);
        }
        if codes.len() % columns != 0 {
            return Err(GridError::FlatLength { len: codes.len(), columns });
        }
        Ok(Self { rows: codes.len() / columns, columns, codes })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of cells (= number of states)
    pub fn num_cells(&self) -> usize {
        self.codes.len()
    }

    /// Code at `(row, col)`, `None` when out of bounds
    pub fn code(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.codes.get(cell_to_state(row, col, self.columns)).copied()
    }

    /// Category of the cell holding state `s`
    pub fn category_of_state(&self, s: usize) -> Option<CellCategory> {
        let (row, col) = state_to_cell(s, self.columns);
        self.code(row, col).map(CellCategory::from_code)
    }

    /// Row strings, e.g. for handing back to JavaScript
    pub fn to_row_strings(&self) -> Vec<String> {
        self.codes.chunks(self.columns).map(|r| r.iter().collect()).collect()
    }
}

/// Anything that exposes a grid map layout
pub trait GridEnvironment {
    fn desc(&self) -> &GridDescription;
}

impl GridEnvironment for GridDescription {
    fn desc(&self) -> &GridDescription {
        self
    }
}

impl<T: GridEnvironment + ?Sized> GridEnvironment for &T {
    fn desc(&self) -> &GridDescription {
        (**self).desc()
    }
}
