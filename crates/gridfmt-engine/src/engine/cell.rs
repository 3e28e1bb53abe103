//! Cell data structures for the grid.
//!
//! This module provides the core data types for representing cells:
//! - [`Cell`] - Display text plus a numeric/text classification
//! - [`Grid`] - Owned, dense, rectangular cell storage

use serde::{Deserialize, Serialize};

use super::cell_ref::CellRef;
use super::format::format_number;

/// A cell in the grid: raw or evaluated display text and its classification.
///
/// The classification is decided once, when the cell is created from a raw
/// token. A numeric cell's text always parses as a finite `f64`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    text: String,
    numeric: bool,
}

impl Cell {
    /// Create a text cell.
    pub fn new_text(text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            numeric: false,
        }
    }

    /// Create a numeric cell holding the canonical rendering of `n`.
    pub fn new_number(n: f64) -> Cell {
        Cell {
            text: format_number(n),
            numeric: true,
        }
    }

    /// Classify a raw token and create the appropriate cell.
    /// Numeric iff the token parses as a finite `f64`; the text is kept as-is.
    pub fn from_token(token: &str) -> Cell {
        Cell {
            text: token.to_string(),
            numeric: token.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }

    /// The cell's display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// The cell's value as a number, if it is classified numeric.
    pub fn as_number(&self) -> Option<f64> {
        if !self.numeric {
            return None;
        }
        self.text.parse().ok()
    }
}

/// Owned rectangular grid storage, row-major.
///
/// Rows are equal length once the loader has padded them; the structure is
/// fixed after load and only cell contents change during evaluation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Grid {
        Grid { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Width of one row. Out-of-range rows have width 0.
    pub fn row_width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> std::slice::Iter<'_, Vec<Cell>> {
        self.rows.iter()
    }

    /// Look up a cell by reference. `None` when the reference is out of
    /// bounds for the grid.
    pub fn get(&self, reference: &CellRef) -> Option<&Cell> {
        self.at(reference.row, reference.col)
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(col)
    }
}
