//! gridfmt-engine - directive evaluation and table rendering.

pub mod engine;
