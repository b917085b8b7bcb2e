//! Instruction executor for pagetweak.
//!
//! Applies an [`Instruction`](pagetweak_protocols::Instruction) to a
//! [`DocumentTree`](pagetweak_protocols::DocumentTree):
//!
//! - per-element style writes, where a rejected write on one element never
//!   aborts the rest of the batch
//! - font size adjustment relative to the computed size, with a floor
//! - mutually exclusive display modes (light, dark, high contrast) backed by
//!   singleton global style blocks

mod batch;
mod executor;
mod mode;
mod stylesheets;

pub use batch::{BatchReport, ElementResult};
pub use executor::Executor;
pub use mode::DisplayMode;
pub use stylesheets::{DARK_MODE_CSS, HIGH_CONTRAST_CSS};
