//! Storage: delimited-text import and rendered-table export.

mod delimited;
mod writer;

pub use delimited::{parse_delimited, parse_delimited_content};
pub use writer::write_table;
