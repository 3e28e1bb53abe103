//! gridfmt-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::Document;
pub use error::{GridfmtError, Result};

pub use gridfmt_engine::engine::{Cell, CellRef, Grid};
