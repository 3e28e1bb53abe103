//! Rendered-table export.

use crate::error::Result;
use gridfmt_engine::engine::{Grid, render};
use std::fs;
use std::path::Path;

/// Render the grid and write it to a file.
pub fn write_table(path: &Path, grid: &Grid) -> Result<()> {
    fs::write(path, render(grid))?;
    Ok(())
}
