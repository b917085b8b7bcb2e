//! Error types for the pagetweak protocol layer.

mod document;
mod execution;

pub use document::*;
pub use execution::*;
