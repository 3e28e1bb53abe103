//! Grid computation engine.
//!
//! This module provides the core pipeline stages for the grid:
//!
//! - [`Cell`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Directive`], [`evaluate`] - Directive recognition and aggregation
//! - [`render`], [`format_number`] - Column-aligned text rendering

mod cell;
mod cell_ref;
mod eval;
mod format;

pub use cell::{Cell, Grid};
pub use cell_ref::CellRef;
pub use eval::{Directive, HORIZONTAL_RULE, evaluate};
pub use format::{COLUMN_SEPARATOR, column_widths, format_number, render};
