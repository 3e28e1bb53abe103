//! Directive recognition and evaluation.
//!
//! Runs a single forward pass over the grid (row-major, left-to-right),
//! rewriting each aggregate-directive cell with its computed value. The
//! classification assigned at load time is authoritative: cells already
//! classified numeric are never re-examined, and a directive referencing a
//! cell visited earlier in the pass sees that cell's rewritten value while a
//! reference to a later cell sees its raw pre-pass text.

use super::cell::{Cell, Grid};
use super::cell_ref::CellRef;

/// The horizontal-rule directive. A no-op during evaluation; the formatter
/// draws it as a full-width dash run.
pub const HORIZONTAL_RULE: &str = "#hl";

/// A recognized directive embedded in a cell's raw text.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    /// Full-width dashed line, resolved at render time.
    HorizontalRule,
    /// Arithmetic sum of the referenced cells.
    Sum(Vec<String>),
    /// Arithmetic product of the referenced cells.
    Prod(Vec<String>),
}

impl Directive {
    /// Recognize a directive in raw cell text. Anything outside the grammar
    /// is plain text and returns None.
    pub fn parse(text: &str) -> Option<Directive> {
        if text == HORIZONTAL_RULE {
            return Some(Directive::HorizontalRule);
        }

        let inner = text.strip_prefix("#(")?.strip_suffix(')')?;
        if let Some(list) = inner.strip_prefix("sum ") {
            return Some(Directive::Sum(split_refs(list)));
        }
        if let Some(list) = inner.strip_prefix("prod ") {
            return Some(Directive::Prod(split_refs(list)));
        }
        None
    }
}

/// Split a directive's reference list on single spaces. No escaping and no
/// whitespace normalization; malformed tokens stay in the list and resolve
/// to nothing.
fn split_refs(list: &str) -> Vec<String> {
    list.split(' ').map(str::to_string).collect()
}

/// Evaluate every directive cell in place.
pub fn evaluate(grid: &mut Grid) {
    for row in 0..grid.height() {
        for col in 0..grid.row_width(row) {
            let Some(cell) = grid.at(row, col) else {
                continue;
            };
            if cell.is_numeric() {
                continue;
            }

            let Some(directive) = Directive::parse(cell.text()) else {
                continue;
            };
            let value = match directive {
                Directive::HorizontalRule => continue,
                Directive::Sum(refs) => sum_refs(grid, &refs),
                Directive::Prod(refs) => prod_refs(grid, &refs),
            };

            if let Some(cell) = grid.at_mut(row, col) {
                *cell = Cell::new_number(value);
            }
        }
    }
}

/// Sum the resolved, numeric references. Unresolved references and resolved
/// text cells contribute nothing; an empty list sums to 0.
fn sum_refs(grid: &Grid, refs: &[String]) -> f64 {
    let mut sum = 0.0;
    for token in refs {
        let Some(cell) = resolve(grid, token) else {
            continue;
        };
        if let Some(n) = cell.as_number() {
            sum += n;
        }
    }
    sum
}

/// Multiply the resolved, numeric references. Unresolved references are
/// skipped, but the first resolved reference to a non-numeric cell forces
/// the result to 0 and stops accumulation.
fn prod_refs(grid: &Grid, refs: &[String]) -> f64 {
    let mut product = 1.0;
    for token in refs {
        let Some(cell) = resolve(grid, token) else {
            continue;
        };
        match cell.as_number() {
            Some(n) => product *= n,
            None => return 0.0,
        }
    }
    product
}

/// Resolve a reference token against the grid. Out-of-grammar tokens and
/// in-grammar references outside the grid bounds are both unresolved.
fn resolve<'a>(grid: &'a Grid, token: &str) -> Option<&'a Cell> {
    let reference = CellRef::from_str(token)?;
    grid.get(&reference)
}
