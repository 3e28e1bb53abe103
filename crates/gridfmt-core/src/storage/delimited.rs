//! Delimited-text import: comma-separated lines into a rectangular grid.

use crate::error::Result;
use gridfmt_engine::engine::{Cell, Grid};
use std::path::Path;

/// Parse a delimited file into a rectangular grid.
pub fn parse_delimited(path: &Path) -> Result<Grid> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_delimited_content(&content))
}

/// Parse delimited content from a string.
///
/// Each line is one row; tokens are split on commas and classified as they
/// are read. Short rows are right-padded with empty text cells so every row
/// has the maximum width observed across the input.
pub fn parse_delimited_content(content: &str) -> Grid {
    let mut rows: Vec<Vec<Cell>> = content.lines().map(parse_line).collect();
    pad_rows(&mut rows);
    Grid::from_rows(rows)
}

/// Split one line into classified cells. Trailing empty fields do not widen
/// the row; padding restores them as empty text cells.
fn parse_line(line: &str) -> Vec<Cell> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields.into_iter().map(Cell::from_token).collect()
}

fn pad_rows(rows: &mut [Vec<Cell>]) {
    let max_width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        while row.len() < max_width {
            row.push(Cell::new_text(""));
        }
    }
}
