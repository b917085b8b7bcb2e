//! Command classifier for pagetweak.
//!
//! Maps a free-text command ("change background to light blue") onto one of
//! the closed set of [`Instruction`]s. Classification is a fixed, ordered
//! cascade of rules; the first rule that produces an instruction wins.
//!
//! ```
//! use pagetweak_classifier::classify;
//! use pagetweak_protocols::{Instruction, StyleProperty};
//!
//! match classify("Set background to light blue") {
//!     Instruction::SetStyle { property, value, .. } => {
//!         assert_eq!(property, StyleProperty::BackgroundColor);
//!         assert_eq!(value, "lightblue");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod classifier;
mod colors;
mod rules;

pub use classifier::{classify, Classifier};
pub use colors::ColorTable;

pub use pagetweak_protocols::Instruction;
