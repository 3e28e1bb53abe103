use super::Document;
use crate::error::Result;
use crate::storage::{parse_delimited, write_table};
use gridfmt_engine::engine::evaluate;
use std::path::Path;

impl Document {
    /// Load a delimited file into a new document.
    pub fn open(path: &Path) -> Result<Document> {
        let grid = parse_delimited(path)?;
        Ok(Document {
            grid,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Resolve all directive cells in place.
    pub fn evaluate(&mut self) {
        evaluate(&mut self.grid);
    }

    /// Write the rendered grid to a file.
    pub fn export(&self, path: &Path) -> Result<()> {
        write_table(path, &self.grid)
    }
}
