//! Column-aligned text rendering.
//!
//! Pure functions over an evaluated grid: per-column width computation,
//! numeric/text alignment, and the dashed horizontal rule.

use super::cell::{Cell, Grid};
use super::eval::HORIZONTAL_RULE;

/// Fixed separator between columns in rendered output.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Render the grid as column-aligned text, one line per row. The grid is
/// not mutated; an empty grid renders as the empty string.
pub fn render(grid: &Grid) -> String {
    let widths = column_widths(grid);
    let mut out = String::new();

    for row in grid.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(COLUMN_SEPARATOR);
            }
            let width = widths.get(i).copied().unwrap_or(0);
            out.push_str(&format_cell(cell, width));
        }
        out.push('\n');
    }

    out
}

/// Per-column display width: the longest cell text in each column. Rows
/// shorter than the grid width are skipped for the missing columns.
pub fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths = vec![0usize; grid.width()];

    for row in grid.rows() {
        for (i, cell) in row.iter().enumerate() {
            let Some(width) = widths.get_mut(i) else {
                continue;
            };
            *width = (*width).max(cell.text().chars().count());
        }
    }

    widths
}

/// Format one cell to the column width: numeric cells right-aligned, the
/// horizontal rule as a dash run, everything else left-aligned.
fn format_cell(cell: &Cell, width: usize) -> String {
    if cell.is_numeric() {
        format!("{:>width$}", cell.text())
    } else if cell.text() == HORIZONTAL_RULE {
        horizontal_rule(width)
    } else {
        format!("{:<width$}", cell.text())
    }
}

fn horizontal_rule(width: usize) -> String {
    "-".repeat(width)
}

/// Format a number for display: canonical decimal with at least one
/// fractional digit (3 -> "3.0"), otherwise the shortest exact rendering.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}
