//! # pagetweak Protocols
//!
//! Shared definitions for the pagetweak pipeline.
//! Contains only types and traits - no implementations.
//!
//! ## Core Types
//!
//! - [`Instruction`] - Structured result of classifying a text command
//! - [`Outcome`] - Result of executing an instruction against a page
//! - [`DocumentTree`] - Trait for live document implementations
//! - [`StyleBlock`] - Named global style rule set

pub mod document;
pub mod error;
pub mod instruction;
pub mod outcome;

pub use document::{DocumentTree, ElementId, StyleBlock};
pub use error::{DocumentError, ExecutionError};
pub use instruction::{selectors, Instruction, StyleProperty};
pub use outcome::Outcome;
