//! Error types for gridfmt core.
//!
//! Malformed numeric tokens and unresolved cell references are not errors;
//! they fall back to text classification and the skip policies in the
//! evaluator. Only I/O can fail a run.

use thiserror::Error;

/// Errors that can occur while loading or writing a grid
#[derive(Error, Debug)]
pub enum GridfmtError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridfmtError>;
