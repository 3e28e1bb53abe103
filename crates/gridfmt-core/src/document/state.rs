use gridfmt_engine::engine::Grid;
use std::path::PathBuf;

/// UI-agnostic document state: the loaded grid and where it came from.
///
/// The document owns the grid exclusively for the duration of a run; the
/// pipeline stages (load, evaluate, export) borrow it in turn and nothing
/// retains a reference afterwards.
pub struct Document {
    /// The rectangular cell grid.
    pub grid: Grid,
    /// Path the grid was loaded from.
    pub file_path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document {
            grid: Grid::default(),
            file_path: None,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new();
        assert!(doc.grid.is_empty());
        assert!(doc.file_path.is_none());
    }
}
